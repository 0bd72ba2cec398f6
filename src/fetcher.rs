use crate::errors::FetchError;
use crate::models::{ApiResponse, DailyStats};

#[derive(Debug, Clone, Default)]
pub struct StatsFetcher {
    client: reqwest::Client,
}

impl StatsFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, endpoint_url: &str) -> Result<Vec<DailyStats>, FetchError> {
        let response = self.client.get(endpoint_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.to_string()),
            });
        }

        let body = response.bytes().await?;
        let envelope: ApiResponse =
            serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        envelope.into_records()
    }
}
