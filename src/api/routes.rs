use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Creates the main router: the page, its form target and a health check
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::show_page).post(handlers::submit_action))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
