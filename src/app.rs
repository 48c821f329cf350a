use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/static/*path", get(handlers::static_asset))
        .fallback(handlers::not_found)
        .with_state(state)
}
