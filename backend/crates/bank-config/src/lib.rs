mod auth_config;
mod banking_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod services_config;

pub use auth_config::AuthConfig;
pub use banking_config::BankingConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use services_config::ServicesConfig;

const CONFIG_DIR_ENV: &str = "BANK_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".bank";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";

const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;
const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;

const DEFAULT_USERSERVICE_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_CONTACTS_URL: &str = "http://127.0.0.1:8082";
const DEFAULT_TRANSACTIONS_URL: &str = "http://127.0.0.1:8083";
const DEFAULT_BALANCES_URL: &str = "http://127.0.0.1:8084";
const DEFAULT_HISTORY_URL: &str = "http://127.0.0.1:8085";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 4;

const ROUTING_NUMBER_DIGITS: usize = 9;
const DEFAULT_TOKEN_COOKIE_NAME: &str = "token";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
