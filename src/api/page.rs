//! The grid page: render from the URL, submit back into the URL.
//!
//! Submissions never render directly. They encode the new state into the
//! query and answer with a `303 See Other`, so the browser records a new
//! history entry and back/forward re-derive everything from the URL.

use axum::{
    extract::{Form, RawQuery, State},
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::api::{threshold_from, THRESHOLD_PARAM};
use crate::error::ApiError;
use crate::models::{self, AxisState, GridState};
use crate::services::history::location_for;
use crate::services::{
    hydration, input_parser, matrix, state_codec, GridView, Navigator, PageView, QueryParams,
    RedirectNavigator,
};
use crate::server::AppState;

const PAGE_PATH: &str = "/";

/// Form body posted by the grid page
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
    pub threshold: Option<String>,
}

/// Render the grid page for the current query
pub async fn handle_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or(""));
    let threshold = threshold_from(&params, &state.config);
    let math = state.color_math.as_ref();

    let grid_state = match state_codec::decode_checked(&params, math) {
        Ok(grid_state) => grid_state,
        Err(e) => {
            tracing::warn!(%e, "Ignoring unusable grid state in URL");
            None
        }
    };

    let grid = grid_state
        .as_ref()
        .filter(|s| !s.x.is_empty())
        .map(|s| {
            let grid = matrix::build_grid(&s.x, &s.y, math);
            GridView::build(&grid, math, threshold, &state.config.readable_candidates)
        });

    tracing::info!(
        columns = grid.as_ref().map_or(0, |g| g.header.len()),
        rows = grid.as_ref().map_or(0, |g| g.rows.len()),
        threshold,
        "Rendering grid page"
    );

    let page = PageView {
        form: hydration::hydrate(grid_state.as_ref()),
        threshold,
        min_threshold: state.config.min_threshold,
        max_threshold: state.config.max_threshold,
        query: params.to_query_string(),
        grid,
    };

    Ok(Html(state.templates.render_page(&page)?))
}

/// Parse the submitted form and move to the resulting URL
pub async fn handle_submit(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, ApiError> {
    let math = state.color_math.as_ref();
    let mut params = submitted_params(query.as_deref(), &form, &state);

    let x = input_parser::parse(&form.x, math);
    let y = y_or_x(input_parser::parse(&form.y, math), &x);

    let location = navigate(&mut params, &GridState::new(x, y))?;
    Ok(Redirect::to(&location))
}

/// Swap the two axes from the form. A blank Y field leaves things as they are.
pub async fn handle_reverse(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, ApiError> {
    let math = state.color_math.as_ref();
    let mut params = submitted_params(query.as_deref(), &form, &state);

    let (x, y) = models::reverse(
        input_parser::parse(&form.x, math),
        input_parser::parse(&form.y, math),
    );
    let y = y_or_x(y, &x);

    let location = navigate(&mut params, &GridState::new(x, y))?;
    Ok(Redirect::to(&location))
}

/// Current query plus the submitted threshold
fn submitted_params(query: Option<&str>, form: &SubmitForm, state: &AppState) -> QueryParams {
    let mut params = QueryParams::parse(query.unwrap_or(""));

    let requested = form
        .threshold
        .as_deref()
        .and_then(|t| t.trim().parse::<f64>().ok());
    if let Some(t) = requested {
        params.set(THRESHOLD_PARAM, state.config.threshold(Some(t)).to_string());
    }

    params
}

/// An empty Y axis means "same as X"
fn y_or_x(y: AxisState, x: &AxisState) -> AxisState {
    if y.is_empty() {
        x.clone()
    } else {
        y
    }
}

/// Encode `grid` into `params` and return where to redirect
fn navigate(params: &mut QueryParams, grid: &GridState) -> Result<String, ApiError> {
    let mut navigator = RedirectNavigator::new(PAGE_PATH);

    if state_codec::encode(params, &grid.x, &grid.y)? {
        navigator.push(params);
        tracing::info!(
            columns = grid.x.len(),
            rows = grid.y.len(),
            symmetric = grid.is_symmetric(),
            "Grid state updated"
        );
    } else {
        tracing::info!("No valid colors on X axis, keeping current state");
    }

    Ok(navigator
        .into_location()
        .unwrap_or_else(|| location_for(PAGE_PATH, params)))
}
