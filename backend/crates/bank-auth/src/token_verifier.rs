use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Stateless RS256 session token verification.
///
/// Signature, well-formedness and expiry are all checked; any failure is an
/// `Err`, never a panic. There is no revocation list.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create verifier with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidKey {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // Expiry is checked in Claims::validate_at with no leeway
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Verify a token that may be absent (no cookie, no header).
    #[track_caller]
    pub fn verify(&self, token: Option<&str>) -> AuthErrorResult<Claims> {
        match token {
            Some(token) if !token.trim().is_empty() => self.validate(token),
            _ => Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Validate a token against the current time and return its claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, Utc::now().timestamp())
    }

    #[track_caller]
    pub fn validate_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidSignature => AuthError::InvalidToken {
                    message: "signature does not match".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate_at(now)?;

        Ok(token_data.claims)
    }

    pub fn algorithm(&self) -> &str {
        "RS256"
    }
}
