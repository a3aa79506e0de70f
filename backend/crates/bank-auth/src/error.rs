use bank_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("user {username} does not exist {location}")]
    UserNotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("invalid login {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Missing token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid key: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential storage failed: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for every failure that means "the caller is not authenticated",
    /// as opposed to a fault on our side.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::InvalidCredentials { .. }
                | Self::MissingToken { .. }
                | Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
