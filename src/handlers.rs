use crate::dashboard::DashboardView;
use crate::models::Totals;
use crate::refresh::refresh;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view())
}

pub async fn get_totals(State(state): State<AppState>) -> Json<Totals> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.totals())
}

pub async fn post_refresh(State(state): State<AppState>) -> Json<DashboardView> {
    Json(refresh(&state).await)
}

pub async fn health() -> &'static str {
    "ok"
}
