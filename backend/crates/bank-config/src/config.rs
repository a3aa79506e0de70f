use crate::{
    AuthConfig, BankingConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig, ServicesConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Configuration shared by both services, built once in `main` and passed
/// down explicitly.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub services: ServicesConfig,
    pub banking: BankingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BANK_CONFIG_DIR env var, else use ./.bank/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BANK_* environment variable overrides
    ///
    /// Does NOT validate - call one of the validate methods after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BANK_CONFIG_DIR env var > ./.bank/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate the settings every service shares.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.services.validate()?;
        self.banking.validate()?;
        Ok(())
    }

    /// Validate for the identity service, which signs tokens.
    pub fn validate_identity(&self) -> ConfigErrorResult<()> {
        self.validate()?;

        if self.auth.private_key_path.is_none() {
            return Err(ConfigError::auth(
                "auth.private_key_path is required by the identity service",
            ));
        }

        Ok(())
    }

    /// Validate for the gateway, which verifies tokens and moves money.
    pub fn validate_gateway(&self) -> ConfigErrorResult<()> {
        self.validate()?;

        if self.auth.public_key_path.is_none() {
            return Err(ConfigError::auth(
                "auth.public_key_path is required by the gateway",
            ));
        }

        self.banking.require_local_routing_number()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn private_key_pem(&self) -> ConfigErrorResult<String> {
        self.auth.load_private_key(&Self::config_dir()?)
    }

    pub fn public_key_pem(&self) -> ConfigErrorResult<String> {
        self.auth.load_public_key(&Self::config_dir()?)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs key material).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth: lifetime={}s, private_key={}, public_key={}",
            self.auth.token_lifetime_secs,
            if self.auth.private_key_path.is_some() {
                "configured"
            } else {
                "none"
            },
            if self.auth.public_key_path.is_some() {
                "configured"
            } else {
                "none"
            }
        );

        info!(
            "  password hashing: argon2id m={}KiB t={} p={}",
            self.auth.hash_memory_kib, self.auth.hash_iterations, self.auth.hash_parallelism
        );

        info!(
            "  services: users={}, contacts={}, transactions={}, balances={}, history={}, timeout={}s",
            self.services.userservice_url,
            self.services.contacts_url,
            self.services.transactions_url,
            self.services.balances_url,
            self.services.history_url,
            self.services.backend_timeout_secs
        );

        info!(
            "  banking: routing={}, cookie={}",
            self.banking.local_routing_number.as_deref().unwrap_or("unset"),
            self.banking.token_cookie_name
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BANK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BANK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BANK_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_parse(
            "BANK_TOKEN_LIFETIME_SECS",
            &mut self.auth.token_lifetime_secs,
        );
        Self::apply_env_option_string("BANK_PRIVATE_KEY_PATH", &mut self.auth.private_key_path);
        Self::apply_env_option_string("BANK_PUBLIC_KEY_PATH", &mut self.auth.public_key_path);
        Self::apply_env_parse("BANK_HASH_MEMORY_KIB", &mut self.auth.hash_memory_kib);
        Self::apply_env_parse("BANK_HASH_ITERATIONS", &mut self.auth.hash_iterations);
        Self::apply_env_parse("BANK_HASH_PARALLELISM", &mut self.auth.hash_parallelism);

        // Services
        Self::apply_env_string("BANK_USERSERVICE_URL", &mut self.services.userservice_url);
        Self::apply_env_string("BANK_CONTACTS_URL", &mut self.services.contacts_url);
        Self::apply_env_string("BANK_TRANSACTIONS_URL", &mut self.services.transactions_url);
        Self::apply_env_string("BANK_BALANCES_URL", &mut self.services.balances_url);
        Self::apply_env_string("BANK_HISTORY_URL", &mut self.services.history_url);
        Self::apply_env_parse(
            "BANK_BACKEND_TIMEOUT_SECS",
            &mut self.services.backend_timeout_secs,
        );

        // Banking
        Self::apply_env_option_string(
            "BANK_LOCAL_ROUTING_NUMBER",
            &mut self.banking.local_routing_number,
        );
        Self::apply_env_string(
            "BANK_TOKEN_COOKIE_NAME",
            &mut self.banking.token_cookie_name,
        );

        // Logging
        Self::apply_env_parse("BANK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BANK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BANK_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
