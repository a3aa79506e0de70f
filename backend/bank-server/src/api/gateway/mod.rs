pub mod deposit;
pub mod home;
pub mod payment;
pub mod session;

use crate::TransferFailure;

use axum::{Form, extract::rejection::FormRejection};
use log::debug;
use serde::Serialize;

/// Body of a successful gateway action
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Unwrap a form body, or fail as invalid input. Called only once the
/// caller is authenticated.
fn form_body<T>(form: Result<Form<T>, FormRejection>) -> Result<T, TransferFailure> {
    form.map(|Form(body)| body).map_err(|rejection| {
        debug!("Rejecting form body: {}", rejection.body_text());
        TransferFailure::validation(rejection.body_text(), None)
    })
}
