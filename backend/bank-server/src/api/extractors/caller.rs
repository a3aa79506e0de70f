//! Axum extractors for the caller's session token

use crate::api::extractors::cookie::cookie_value;
use crate::{ApiError, GatewayState};

use bank_auth::Claims;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// The raw token the caller presented, if any. Never rejects.
///
/// Looks at the session cookie first, then `Authorization: Bearer`.
pub struct PresentedToken(pub Option<String>);

impl PresentedToken {
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        if let Some(token) = cookie_value(headers, cookie_name).filter(|t| !t.is_empty()) {
            return PresentedToken(Some(token));
        }

        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        PresentedToken(bearer)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<GatewayState> for PresentedToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &GatewayState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(PresentedToken::from_headers(&parts.headers, &state.cookie_name)) }
    }
}

/// A caller whose token verified. Rejects with 401 otherwise.
pub struct Caller {
    pub claims: Claims,
    /// Forwarded as the Bearer credential to collaborators
    pub token: String,
}

impl FromRequestParts<GatewayState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &GatewayState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let PresentedToken(token) =
                PresentedToken::from_headers(&parts.headers, &state.cookie_name);

            let claims = state.verifier.verify(token.as_deref()).map_err(|e| {
                log::debug!("Rejecting caller: {}", e);
                ApiError::unauthorized("user is not authenticated")
            })?;

            Ok(Caller {
                claims,
                token: token.unwrap_or_default(),
            })
        }
    }
}
