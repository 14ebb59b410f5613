use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub notification_ttl_seconds: u64,
    pub user_agent: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let notification_ttl = lookup("NOTIFICATION_TTL_SECONDS").unwrap_or_else(|| "5".to_string());

        Ok(Self {
            api_url: lookup("TRACKER_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            notification_ttl_seconds: notification_ttl.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "NOTIFICATION_TTL_SECONDS",
                    value: notification_ttl.clone(),
                }
            })?,
            user_agent: lookup("TRACKER_USER_AGENT")
                .unwrap_or_else(|| format!("tracker-client/{}", env!("CARGO_PKG_VERSION"))),
        })
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            notification_ttl_seconds: 5,
            user_agent: format!("tracker-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
