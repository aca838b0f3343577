use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::history::location_for;
use crate::services::{input_parser, state_codec, QueryParams};

/// Request body for building a shareable link
#[derive(Debug, Deserialize, ToSchema)]
pub struct EncodeRequest {
    /// X axis text
    pub x: String,
    /// Y axis text; blank means same as X
    #[serde(default)]
    pub y: String,
    /// Existing query to update (other parameters are kept)
    #[serde(default)]
    pub query: String,
}

/// Response with the encoded state
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeResponse {
    /// Query string without the leading `?`
    pub query: String,
    /// Full shareable URL
    pub url: String,
    /// False when X had no valid colors and the query was left as is
    pub changed: bool,
}

/// Encode two color lists into a shareable query string
#[utoipa::path(
    post,
    path = "/api/encode",
    request_body = EncodeRequest,
    responses(
        (status = 200, description = "State encoded", body = EncodeResponse),
    ),
    tag = "Input"
)]
pub async fn handle_encode(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<EncodeRequest>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let math = state.color_math.as_ref();
    let x = input_parser::parse(&request.x, math);
    let mut y = input_parser::parse(&request.y, math);
    if y.is_empty() {
        y = x.clone();
    }

    let mut params = QueryParams::parse(&request.query);
    let changed = state_codec::encode(&mut params, &x, &y)?;

    let url = format!(
        "{}{}",
        state.config.base_url.trim_end_matches('/'),
        location_for("/", &params)
    );

    Ok(Json(EncodeResponse {
        query: params.to_query_string(),
        url,
        changed,
    }))
}
