//! The money-movement write path.
//!
//! A payment or deposit is one pass through a fixed sequence: authenticate
//! the caller, validate the form, check the routing policy, optionally save
//! a new contact, then submit to the ledger writer. Every step either
//! advances or ends the request with a [`TransferFailure`]; nothing is
//! retried and nothing after a failed step runs.

pub mod deposit_form;
pub mod payment_form;
pub mod transaction_orchestrator;
pub mod transfer_failure;

use crate::TransferFailure;

fn required(value: &Option<String>, field: &str) -> Result<String, TransferFailure> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(TransferFailure::validation(
            format!("missing value for {}", field),
            Some(field),
        )),
    }
}

/// A blank label means "do not save this counterparty".
fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
