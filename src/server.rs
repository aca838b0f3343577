//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{ColorMath, CssColorMath, TemplateService};

/// Application state shared across all handlers.
///
/// Everything in here is read-only; each request derives its grid from its
/// own query string or form body.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub color_math: Arc<dyn ColorMath>,
    pub templates: Arc<TemplateService>,
}

/// Create application state with the CSS color implementation.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    create_app_state_with_math(config, Arc::new(CssColorMath::new()))
}

/// Create application state with a custom color implementation.
pub fn create_app_state_with_math(
    config: AppConfig,
    color_math: Arc<dyn ColorMath>,
) -> anyhow::Result<AppState> {
    let templates = Arc::new(
        TemplateService::new()
            .map_err(|e| anyhow::anyhow!("Failed to create template service: {e}"))?,
    );

    Ok(AppState {
        config: Arc::new(config),
        color_math,
        templates,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Grid page and form submission
        .route("/", get(api::handle_page).post(api::handle_submit))
        .route("/reverse", post(api::handle_reverse))
        // JSON API
        .route("/api/grid", get(api::handle_grid))
        .route("/api/parse", post(api::handle_parse))
        .route("/api/encode", post(api::handle_encode))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
