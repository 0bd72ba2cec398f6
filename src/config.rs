use crate::errors::ConfigError;
use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://monitor-api.korupt.me/api/v1/weekly";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub port: u16,
    pub refresh_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("STATS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let refresh_interval = match lookup("STATS_REFRESH_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidRefreshInterval(raw.clone()))?;
                // 0 switches periodic refresh off
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_url,
            port,
            refresh_interval,
        })
    }
}

fn validate_api_url(raw: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(raw).map_err(|_| ConfigError::InvalidApiUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidApiUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.refresh_interval, None);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STATS_API_URL", "https://stats.example.test/api/v1/weekly"),
            ("PORT", "9090"),
            ("STATS_REFRESH_SECS", "86400"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://stats.example.test/api/v1/weekly");
        assert_eq!(config.port, 9090);
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(86_400)));
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn zero_refresh_disables_periodic_refresh() {
        let config = Config::from_lookup(lookup_from(&[("STATS_REFRESH_SECS", "0")])).unwrap();
        assert_eq!(config.refresh_interval, None);
    }

    #[test]
    fn rejects_bad_refresh_interval() {
        let err = Config::from_lookup(lookup_from(&[("STATS_REFRESH_SECS", "daily")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRefreshInterval("daily".into()));
    }

    #[test]
    fn rejects_relative_or_non_http_urls() {
        for raw in ["/api/v1/weekly", "ftp://stats.example.test/weekly", ""] {
            let err = Config::from_lookup(lookup_from(&[("STATS_API_URL", raw)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidApiUrl(raw.to_string()));
        }
    }
}
