use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid grid state: {0}")]
    InvalidState(#[from] StateError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// Failure to read or write grid state in a URL query string
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Malformed percent-encoding in {param}")]
    Encoding { param: &'static str },

    #[error("Malformed JSON in {param}: {source}")]
    Json {
        param: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid color in {param}: {color}")]
    InvalidColor { param: &'static str, color: String },

    #[error("Blank color name in {param}")]
    InvalidName { param: &'static str },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidState(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Template(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_encoding() {
        let error = StateError::Encoding { param: "xAxisData" };
        assert_eq!(error.to_string(), "Malformed percent-encoding in xAxisData");
    }

    #[test]
    fn test_state_error_invalid_color() {
        let error = StateError::InvalidColor {
            param: "yAxisData",
            color: "nope".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid color in yAxisData: nope");
    }

    #[test]
    fn test_state_error_json() {
        let source = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        let error = StateError::Json {
            param: "xAxisData",
            source,
        };
        assert!(error.to_string().starts_with("Malformed JSON in xAxisData: "));
    }

    #[test]
    fn test_state_error_invalid_name() {
        let error = StateError::InvalidName { param: "xAxisData" };
        assert_eq!(error.to_string(), "Blank color name in xAxisData");
    }

    #[test]
    fn test_api_error_from_state_error() {
        let api_error: ApiError = StateError::Encoding { param: "xAxisData" }.into();
        match api_error {
            ApiError::InvalidState(_) => {}
            ApiError::Template(_) => panic!("Expected InvalidState variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response =
            ApiError::InvalidState(StateError::Encoding { param: "xAxisData" }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Template(TemplateError::Tera(tera::Error::msg("boom"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
