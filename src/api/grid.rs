use axum::{
    extract::{RawQuery, State},
    response::Json,
};

use crate::api::threshold_from;
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::{matrix, state_codec, Grid, GridView, QueryParams};

/// Get the contrast grid for a shared URL's query
///
/// Takes the same query string as the grid page. Without an X axis the
/// grid is empty; malformed state is rejected.
#[utoipa::path(
    get,
    path = "/api/grid",
    responses(
        (status = 200, description = "Grid computed", body = GridView),
        (status = 400, description = "Malformed grid state in query"),
    ),
    params(
        ("xAxisData" = Option<String>, Query, description = "Percent-encoded JSON array of {color, name?}"),
        ("yAxisData" = Option<String>, Query, description = "Same shape; omitted when equal to xAxisData"),
        ("threshold" = Option<f64>, Query, description = "Minimum contrast ratio (default: 4.5)"),
    ),
    tag = "Grid"
)]
pub async fn handle_grid(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<GridView>, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or(""));
    let threshold = threshold_from(&params, &state.config);
    let math = state.color_math.as_ref();

    let grid = match state_codec::decode_checked(&params, math)? {
        Some(grid_state) => matrix::build_grid(&grid_state.x, &grid_state.y, math),
        None => Grid::default(),
    };

    tracing::debug!(
        columns = grid.header.len(),
        rows = grid.rows.len(),
        "Grid computed"
    );

    Ok(Json(GridView::build(
        &grid,
        math,
        threshold,
        &state.config.readable_candidates,
    )))
}
