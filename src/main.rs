use input_analytics::refresh::{refresh, spawn_periodic_refresh};
use input_analytics::{router, AppState, Config, StatsFetcher};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config.api_url.as_str(), StatsFetcher::new());

    let initial = state.clone();
    tokio::spawn(async move {
        refresh(&initial).await;
    });

    if let Some(every) = config.refresh_interval {
        info!("refreshing stats every {}s", every.as_secs());
        spawn_periodic_refresh(state.clone(), every);
    }

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
