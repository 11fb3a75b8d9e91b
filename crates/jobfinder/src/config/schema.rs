use serde::{Deserialize, Serialize};

use crate::repository::IdStrategy;

pub const DEFAULT_API_URL: &str = "https://empllo.com/api/v1";

/// Environment variable overriding `apiUrl`.
pub const ENV_API_URL: &str = "JOBFINDER_API_URL";
/// Environment variable overriding `logFilter`.
pub const ENV_LOG_FILTER: &str = "JOBFINDER_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("jobfinder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            id_strategy: IdStrategy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl ClientConfig {
    /// Applies `JOBFINDER_API_URL` and `JOBFINDER_LOG` when set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(ENV_API_URL) {
            log::debug!("Overriding apiUrl from {}", ENV_API_URL);
            self.api_url = url;
        }
        if let Some(filter) = non_empty_env(ENV_LOG_FILTER) {
            self.log_filter = filter;
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
