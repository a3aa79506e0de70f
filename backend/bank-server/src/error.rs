use thiserror::Error;

/// Startup failures of either binary.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] bank_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] bank_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] bank_auth::AuthError),

    #[error("HTTP client setup error: {0}")]
    Client(#[from] bank_client::ClientError),

    #[error("IO error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
