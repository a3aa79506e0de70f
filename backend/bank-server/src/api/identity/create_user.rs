//! POST /users

use crate::{ApiError, ApiResult, IdentityState};

use bank_core::{NewUser, SignupForm};
use bank_db::DbError;

use std::collections::HashMap;
use std::panic::Location;

use axum::{Form, Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use log::{debug, error, info};
use serde_json::{Value, json};

const CREATE_FAILED: &str = "failed to create user";

/// Create a user from a signup form.
///
/// Input is validated before anything is hashed or stored. Duplicate
/// usernames are detected by the store's unique index alone.
pub async fn create_user(
    State(state): State<IdentityState>,
    Form(fields): Form<HashMap<String, String>>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    debug!("Validating new user request");
    let form = SignupForm::from_fields(&fields)?;

    debug!("Creating password hash");
    let hasher = state.hasher.clone();
    let password = form.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            ApiError::internal(CREATE_FAILED)
        })?
        .map_err(|e| {
            error!("Password hashing failed: {}", e);
            ApiError::internal(CREATE_FAILED)
        })?;

    let user = NewUser {
        username: form.username,
        password_hash,
        profile: form.profile,
    };

    debug!("Adding user to the database");
    match state.store.insert(&user).await {
        Ok(account_id) => {
            info!("Successfully created user {} ({})", user.username, account_id);
            Ok((StatusCode::CREATED, Json(json!({}))))
        }
        Err(DbError::UsernameTaken { username, .. }) => Err(ApiError::Conflict {
            message: format!("user {} already exists", username),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(e) => {
            error!("Error creating new user: {}", e);
            Err(ApiError::internal(CREATE_FAILED))
        }
    }
}
