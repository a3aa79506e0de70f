//! Browser session: POST /login, POST /signup, POST /logout

use super::MessageResponse;
use crate::{ApiError, ApiResult, GatewayState, clear_session_cookie, session_cookie};

use bank_client::ClientError;

use std::panic::Location;

use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, header},
};
use error_location::ErrorLocation;
use log::{error, info, warn};
use serde::Deserialize;

const LOGIN_FAILED: &str = "Login Failed";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<GatewayState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<(HeaderMap, Json<MessageResponse>)> {
    let (Some(username), Some(password)) = (form.username, form.password) else {
        return Err(ApiError::unauthorized(LOGIN_FAILED));
    };

    let headers = login_cookie(&state, &username, &password).await?;
    Ok((headers, Json(MessageResponse::new("Login successful"))))
}

/// Forward a signup to the identity service, then log the new user in.
pub async fn signup(
    State(state): State<GatewayState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> ApiResult<(HeaderMap, Json<MessageResponse>)> {
    info!("Creating new user");
    state
        .users
        .create_user(&fields)
        .await
        .map_err(signup_error)?;
    info!("New user created");

    let field = |name: &str| {
        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    };

    let headers = login_cookie(&state, &field("username"), &field("password")).await?;
    Ok((headers, Json(MessageResponse::new("Signup successful"))))
}

pub async fn logout(State(state): State<GatewayState>) -> (HeaderMap, Json<MessageResponse>) {
    info!("Logging out");
    let mut headers = HeaderMap::new();
    if let Some(cookie) = clear_session_cookie(&state.cookie_name) {
        headers.insert(header::SET_COOKIE, cookie);
    }
    (headers, Json(MessageResponse::new("Logged out")))
}

/// Log in through the identity service and build the `Set-Cookie` header.
///
/// The returned token is verified before it is handed to the browser;
/// the cookie lives exactly as long as the token.
async fn login_cookie(state: &GatewayState, username: &str, password: &str) -> ApiResult<HeaderMap> {
    let token = state.users.login(username, password).await.map_err(|e| {
        warn!("Login for {} failed: {}", username, e);
        ApiError::unauthorized(LOGIN_FAILED)
    })?;

    let claims = state.verifier.validate(&token).map_err(|e| {
        error!("Identity service issued a token that does not verify: {}", e);
        ApiError::unauthorized(LOGIN_FAILED)
    })?;

    let cookie = session_cookie(&state.cookie_name, &token, claims.lifetime_secs())
        .ok_or_else(|| ApiError::internal("failed to build session cookie"))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);
    info!("Successfully logged in {}", claims.subject_username);
    Ok(headers)
}

#[track_caller]
fn signup_error(e: ClientError) -> ApiError {
    let location = ErrorLocation::from(Location::caller());
    let message = e.user_message();

    match e {
        ClientError::Rejected { status: 400, .. } => ApiError::Validation {
            message,
            field: None,
            location,
        },
        ClientError::Rejected { status: 409, .. } => ApiError::Conflict { message, location },
        ClientError::Timeout { .. } => ApiError::Timeout { message, location },
        other => {
            error!("Error creating new user: {}", other);
            ApiError::DownstreamRejected { message, location }
        }
    }
}
