use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims. Wire names are the short ones the other services
/// already read (`user`, `acct`, `name`, `iat`, `exp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "user")]
    pub subject_username: String,
    #[serde(rename = "acct")]
    pub account_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Issued at (Unix seconds)
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiration (Unix seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    pub fn lifetime_secs(&self) -> i64 {
        self.expires_at - self.issued_at
    }

    /// Validate claims after signature verification.
    ///
    /// A token is live only while `now < exp`; there is no clock-skew leeway.
    #[track_caller]
    pub fn validate_at(&self, now: i64) -> AuthErrorResult<()> {
        if now >= self.expires_at {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.issued_at > self.expires_at {
            return Err(AuthError::InvalidClaim {
                claim: "iat".to_string(),
                message: "iat is after exp".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.subject_username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "user".to_string(),
                message: "user cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.account_id.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "acct".to_string(),
                message: "acct cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
