use crate::errors::FetchError;
use serde::{Deserialize, Serialize};

/// One day's interaction counts as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: String,
    pub key_presses: u64,
    pub left_clicks: u64,
    pub right_clicks: u64,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub fn into_records(self) -> Result<Vec<DailyStats>, FetchError> {
        if !self.success {
            return Err(FetchError::ApiLogic);
        }
        serde_json::from_value(self.data).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub key_presses: u64,
    pub left_clicks: u64,
    pub right_clicks: u64,
}
