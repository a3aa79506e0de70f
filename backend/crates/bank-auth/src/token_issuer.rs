use crate::{AuthError, Claims, PasswordHasher, Result as AuthErrorResult, SessionToken};

use bank_core::UserRecord;
use bank_db::CredentialStore;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::{debug, info};

/// Signs session tokens with the deployment's RSA private key.
///
/// Only the identity service constructs one of these; every other service
/// holds a `TokenVerifier` built from the public half.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    lifetime_secs: i64,
}

impl TokenIssuer {
    #[track_caller]
    pub fn with_rs256(private_key_pem: &str, lifetime_secs: u64) -> AuthErrorResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidKey {
                message: format!("Invalid RSA private key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let lifetime_secs = i64::try_from(lifetime_secs).map_err(|_| AuthError::InvalidKey {
            message: format!("Token lifetime {}s is out of range", lifetime_secs),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            encoding_key,
            lifetime_secs,
        })
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }

    /// Authenticate `username`/`password` and issue a token.
    ///
    /// Unknown users fail with `UserNotFound`, a wrong password with
    /// `InvalidCredentials`.
    pub async fn login(
        &self,
        store: &CredentialStore,
        hasher: &PasswordHasher,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<SessionToken> {
        debug!("Getting the user data");
        let user = store
            .find_by_username(username)
            .await
            .map_err(|source| AuthError::Storage {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Validating the password");
        let hasher = hasher.clone();
        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Password verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !matches {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.issue(&user)?;
        info!("Login successful for {}", user.username);
        Ok(token)
    }

    /// Issue a token for `user` starting now.
    #[track_caller]
    pub fn issue(&self, user: &UserRecord) -> AuthErrorResult<SessionToken> {
        self.issue_at(user, Utc::now().timestamp())
    }

    /// Issue a token for `user` with an explicit issue time.
    #[track_caller]
    pub fn issue_at(&self, user: &UserRecord, issued_at: i64) -> AuthErrorResult<SessionToken> {
        let claims = Claims {
            subject_username: user.username.clone(),
            account_id: user.account_id.clone(),
            display_name: user.display_name(),
            issued_at,
            expires_at: issued_at + self.lifetime_secs,
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key).map_err(
            |source| AuthError::Signing {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(SessionToken { token, claims })
    }
}
