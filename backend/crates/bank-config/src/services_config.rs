use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_BALANCES_URL,
    DEFAULT_CONTACTS_URL, DEFAULT_HISTORY_URL, DEFAULT_TRANSACTIONS_URL, DEFAULT_USERSERVICE_URL,
};

use serde::Deserialize;

/// Base URLs of the collaborator services the gateway calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub userservice_url: String,
    pub contacts_url: String,
    pub transactions_url: String,
    pub balances_url: String,
    pub history_url: String,
    /// Bound on every outbound call; a timed-out call is a failure, never retried
    pub backend_timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            userservice_url: String::from(DEFAULT_USERSERVICE_URL),
            contacts_url: String::from(DEFAULT_CONTACTS_URL),
            transactions_url: String::from(DEFAULT_TRANSACTIONS_URL),
            balances_url: String::from(DEFAULT_BALANCES_URL),
            history_url: String::from(DEFAULT_HISTORY_URL),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend_timeout_secs == 0 {
            return Err(ConfigError::services(
                "services.backend_timeout_secs must be > 0",
            ));
        }

        for (name, url) in [
            ("services.userservice_url", &self.userservice_url),
            ("services.contacts_url", &self.contacts_url),
            ("services.transactions_url", &self.transactions_url),
            ("services.balances_url", &self.balances_url),
            ("services.history_url", &self.history_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::services(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }
}
