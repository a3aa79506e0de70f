use bank_auth::AuthError;
use bank_client::ClientError;
use bank_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Terminal failure states of a payment or deposit.
#[derive(Error, Debug)]
pub enum TransferFailure {
    #[error("caller is not authenticated: {source} {location}")]
    Unauthenticated {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("invalid request: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Deposit from an account that claims to be at this bank
    #[error("invalid routing number {location}")]
    InvalidRouting {
        field: String,
        location: ErrorLocation,
    },

    /// A collaborator refused a step that precedes the ledger submission.
    /// No money moved.
    #[error("{service} rejected the request: {message} {location}")]
    DownstreamRejected {
        service: &'static str,
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    #[error("ledger rejected the transaction: {message} {location}")]
    LedgerRejected {
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    /// The outcome is unknown to us; the idempotency id is the caller's
    /// only safe way to try again.
    #[error("{service} timed out {location}")]
    Timeout {
        service: &'static str,
        location: ErrorLocation,
    },
}

impl TransferFailure {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        TransferFailure::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated(source: AuthError) -> Self {
        TransferFailure::Unauthenticated {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_routing(field: &str) -> Self {
        TransferFailure::InvalidRouting {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A contact registry failure. Timeouts stay distinguishable.
    #[track_caller]
    pub fn from_contact_error(err: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            ClientError::Timeout { service, .. } => TransferFailure::Timeout { service, location },
            other => TransferFailure::DownstreamRejected {
                service: "contacts",
                status: other.status(),
                message: other.user_message(),
                location,
            },
        }
    }

    /// A ledger writer failure. The collaborator's text is kept verbatim.
    #[track_caller]
    pub fn from_ledger_error(err: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            ClientError::Timeout { service, .. } => TransferFailure::Timeout { service, location },
            other => TransferFailure::LedgerRejected {
                status: other.status(),
                message: other.user_message(),
                location,
            },
        }
    }

    /// Text for the `"<Operation> failed: <detail>"` message.
    pub fn user_message(&self) -> String {
        match self {
            TransferFailure::Unauthenticated { .. } => "user is not authenticated".to_string(),
            TransferFailure::Validation { message, .. } => message.clone(),
            TransferFailure::InvalidRouting { .. } => "invalid routing number".to_string(),
            TransferFailure::DownstreamRejected { message, .. } => message.clone(),
            TransferFailure::LedgerRejected { message, .. } => message.clone(),
            TransferFailure::Timeout { service, .. } => format!("{} timed out", service),
        }
    }
}

impl From<CoreError> for TransferFailure {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        TransferFailure::Validation {
            message: e.user_message(),
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
