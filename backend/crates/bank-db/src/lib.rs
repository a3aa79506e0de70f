pub mod connection;
pub mod credential_store;
pub mod error;

pub use connection::{connect, connect_in_memory};
pub use credential_store::CredentialStore;
pub use error::{DbError, Result};

/// Account ids are ten digits, one more than a routing number, so the two
/// number spaces never overlap.
pub const ACCOUNT_ID_DIGITS: u32 = 10;

/// Fresh ids to try before giving up on an insert.
pub const MAX_ACCOUNT_ID_ATTEMPTS: u32 = 10;
