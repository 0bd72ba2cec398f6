pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod refresh;
pub mod state;
pub mod stats;

pub use app::router;
pub use config::Config;
pub use dashboard::{Dashboard, DashboardState, DashboardView};
pub use errors::{ConfigError, FetchError};
pub use fetcher::StatsFetcher;
pub use models::{DailyStats, Totals};
pub use state::AppState;
pub use stats::aggregate;
