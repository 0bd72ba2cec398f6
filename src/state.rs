use crate::dashboard::Dashboard;
use crate::fetcher::StatsFetcher;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api_url: Arc<str>,
    pub fetcher: StatsFetcher,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(api_url: impl Into<Arc<str>>, fetcher: StatsFetcher) -> Self {
        Self {
            api_url: api_url.into(),
            fetcher,
            dashboard: Arc::new(Mutex::new(Dashboard::new())),
        }
    }
}
