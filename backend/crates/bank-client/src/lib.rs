//! HTTP clients for the collaborator services the gateway composes.
//!
//! All clients share one `reqwest::Client` built by [`build_http_client`]
//! so every outbound call carries the same bounded timeout. Nothing here
//! retries: a failed or timed-out call is reported once and the caller
//! decides what it means.

pub(crate) mod account_reader;
pub(crate) mod contact_registry;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod ledger;
pub(crate) mod user_service;

pub use account_reader::AccountReader;
pub use contact_registry::ContactRegistryClient;
pub use error::{ClientError, Result as ClientResult};
pub use http::build_http_client;
pub use ledger::LedgerClient;
pub use user_service::UserServiceClient;
