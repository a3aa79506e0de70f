pub mod claims;
pub mod error;
pub mod password_hasher;
pub mod session_token;
pub mod token_issuer;
pub mod token_verifier;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password_hasher::{HashParams, PasswordHasher};
pub use session_token::SessionToken;
pub use token_issuer::TokenIssuer;
pub use token_verifier::TokenVerifier;

#[cfg(test)]
mod tests;
