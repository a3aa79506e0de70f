//! REST API error types
//!
//! Every failure leaves the services as
//! `{"error": {"code", "message", "field"?}}` with a status code matching
//! its kind. Server-side faults are logged in full and reach the caller
//! only as a generic message.

use crate::TransferFailure;

use bank_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad credentials or missing/invalid/expired token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown user (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Duplicate username (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// A collaborator refused a step before money moved (502)
    #[error("Downstream rejected: {message} {location}")]
    DownstreamRejected {
        message: String,
        location: ErrorLocation,
    },

    /// The ledger writer refused the transaction (502)
    #[error("Ledger rejected: {message} {location}")]
    LedgerRejected {
        message: String,
        location: ErrorLocation,
    },

    /// A collaborator did not answer in time (504)
    #[error("Timeout: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    /// Storage or signing failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a failed payment/deposit, prefixing the message with the
    /// operation (`"Payment failed: insufficient balance"`).
    #[track_caller]
    pub fn from_transfer(operation: &str, failure: TransferFailure) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = format!("{} failed: {}", operation, failure.user_message());

        match failure {
            TransferFailure::Unauthenticated { .. } => ApiError::Unauthorized { message, location },
            TransferFailure::Validation { field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            TransferFailure::InvalidRouting { field, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location,
            },
            TransferFailure::DownstreamRejected { .. } => {
                ApiError::DownstreamRejected { message, location }
            }
            TransferFailure::LedgerRejected { .. } => ApiError::LedgerRejected { message, location },
            TransferFailure::Timeout { .. } => ApiError::Timeout { message, location },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DownstreamRejected { .. } | ApiError::LedgerRejected { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (code, message, field) = match self {
            ApiError::Validation { message, field, .. } => ("VALIDATION_ERROR", message, field),
            ApiError::Unauthorized { message, .. } => ("UNAUTHORIZED", message, None),
            ApiError::NotFound { message, .. } => ("NOT_FOUND", message, None),
            ApiError::Conflict { message, .. } => ("CONFLICT", message, None),
            ApiError::DownstreamRejected { message, .. } => ("DOWNSTREAM_REJECTED", message, None),
            ApiError::LedgerRejected { message, .. } => ("LEDGER_REJECTED", message, None),
            ApiError::Timeout { message, .. } => ("TIMEOUT", message, None),
            ApiError::Internal { message, .. } => ("INTERNAL_ERROR", message, None),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Validation failures from form parsing
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.user_message(),
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
