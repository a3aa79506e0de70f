use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_COOKIE_NAME, ROUTING_NUMBER_DIGITS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BankingConfig {
    /// This deployment's routing number. Required by the gateway.
    pub local_routing_number: Option<String>,
    pub token_cookie_name: String,
}

impl Default for BankingConfig {
    fn default() -> Self {
        Self {
            local_routing_number: None,
            token_cookie_name: String::from(DEFAULT_TOKEN_COOKIE_NAME),
        }
    }
}

impl BankingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(routing) = &self.local_routing_number
            && !is_routing_number(routing)
        {
            return Err(ConfigError::banking(format!(
                "banking.local_routing_number must be exactly {} digits, got '{}'",
                ROUTING_NUMBER_DIGITS, routing
            )));
        }

        if self.token_cookie_name.is_empty()
            || !self
                .token_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::banking(format!(
                "banking.token_cookie_name is not a valid cookie name: '{}'",
                self.token_cookie_name
            )));
        }

        Ok(())
    }

    pub fn require_local_routing_number(&self) -> ConfigErrorResult<&str> {
        self.local_routing_number
            .as_deref()
            .ok_or_else(|| ConfigError::banking("banking.local_routing_number is required"))
    }
}

fn is_routing_number(value: &str) -> bool {
    value.len() == ROUTING_NUMBER_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}
