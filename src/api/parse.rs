use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ColorEntry;
use crate::server::AppState;
use crate::services::input_parser;

/// Request body for parsing
#[derive(Debug, Deserialize, ToSchema)]
pub struct ParseRequest {
    /// Free text, one color per line, optionally `name: color`
    pub text: String,
}

/// Response from parsing
#[derive(Debug, Serialize, ToSchema)]
pub struct ParseResponse {
    /// Entries in line order; lines without a color are skipped
    pub entries: Vec<ColorEntry>,
}

/// Parse free text into color entries
#[utoipa::path(
    post,
    path = "/api/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Text parsed", body = ParseResponse),
    ),
    tag = "Input"
)]
pub async fn handle_parse(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<ParseRequest>,
) -> Json<ParseResponse> {
    let axis = input_parser::parse(&request.text, state.color_math.as_ref());

    Json(ParseResponse {
        entries: axis.into_entries(),
    })
}
