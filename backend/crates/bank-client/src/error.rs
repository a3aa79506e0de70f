use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur calling a collaborator service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request to {service} failed: {message} {location}")]
    Http {
        service: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {service} timed out {location}")]
    Timeout {
        service: &'static str,
        location: ErrorLocation,
    },

    #[error("{service} rejected the request with {status}: {message} {location}")]
    Rejected {
        service: &'static str,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error from {service}: {message} {location}")]
    Json {
        service: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context. Timeouts get their own variant.
    #[track_caller]
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ClientError::Timeout {
                service,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ClientError::Http {
            service,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(service: &'static str, err: serde_json::Error) -> Self {
        ClientError::Json {
            service,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn rejected(service: &'static str, status: u16, message: String) -> Self {
        ClientError::Rejected {
            service,
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The text a user may see: the collaborator's own message when it
    /// gave one, otherwise a short description.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Rejected { status, .. } => format!("request rejected ({})", status),
            ClientError::Timeout { service, .. } => format!("{} timed out", service),
            ClientError::Http { service, .. } => format!("{} is unavailable", service),
            ClientError::Json { service, .. } => format!("invalid response from {}", service),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
