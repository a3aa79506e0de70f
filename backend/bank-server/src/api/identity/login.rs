//! GET /login

use crate::{ApiError, ApiResult, IdentityState};

use bank_auth::AuthError;

use std::collections::HashMap;
use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;
use log::error;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange `username` and `password` for a signed session token.
pub async fn login(
    State(state): State<IdentityState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (params.get("username"), params.get("password"))
    else {
        return Err(ApiError::validation("missing required field(s)", None));
    };

    let session = state
        .issuer
        .login(&state.store, &state.hasher, username, password)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound { username, .. } => ApiError::NotFound {
                message: format!("user {} does not exist", username),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidCredentials { .. } => ApiError::unauthorized("invalid login"),
            other => {
                error!("Error logging in: {}", other);
                ApiError::internal("failed to retrieve user information")
            }
        })?;

    Ok(Json(LoginResponse {
        token: session.token,
    }))
}
