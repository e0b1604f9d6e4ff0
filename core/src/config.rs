//! Client configuration.
//!
//! The library reads nothing implicitly; callers either build a
//! `ClientConfig` in code or opt into `ClientConfig::from_env`.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.zillow.com/webservice";

pub const ENV_ZWS_ID: &str = "ZILLOW_ZWS_ID";
pub const ENV_BASE_URL: &str = "ZILLOW_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ZILLOW_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application id sent as `zws-id` on every call.
    pub zws_id: String,
    pub base_url: String,
    /// Overall per-call timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(zws_id: impl Into<String>) -> Self {
        Self {
            zws_id: zws_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Read `ZILLOW_ZWS_ID` (required), `ZILLOW_BASE_URL` and
    /// `ZILLOW_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let zws_id = lookup(ENV_ZWS_ID)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_ZWS_ID))?;
        let mut config = Self::new(zws_id);

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
