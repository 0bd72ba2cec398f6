use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/totals", get(handlers::get_totals))
        .route("/api/refresh", post(handlers::post_refresh))
        .with_state(state)
}
