use crate::dashboard::{DashboardState, DashboardView};
use crate::state::AppState;
use std::time::Duration;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, error, info};

pub async fn refresh(state: &AppState) -> DashboardView {
    let ticket = state.dashboard.lock().await.begin_refresh();
    info!("fetching weekly stats from {}", state.api_url);

    let result = state.fetcher.fetch(&state.api_url).await;
    if let Err(err) = &result {
        error!("stats refresh failed ({}): {err}", err.kind());
    }

    let mut dashboard = state.dashboard.lock().await;
    if !dashboard.complete(ticket, result) {
        debug!("discarding stale stats response");
    } else if let DashboardState::Ready { records, totals, .. } = dashboard.state() {
        info!(
            "loaded {} days: {} key presses, {} left clicks, {} right clicks",
            records.len(),
            totals.key_presses,
            totals.left_clicks,
            totals.right_clicks
        );
    }
    dashboard.view()
}

pub fn spawn_periodic_refresh(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            refresh(&state).await;
        }
    })
}
