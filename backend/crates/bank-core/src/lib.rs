pub mod amount;
pub mod error;
pub mod history;
pub mod models;
pub mod signup;

pub use amount::parse_minor_units;
pub use error::{CoreError, Result};
pub use history::populate_contact_labels;
pub use models::contact_alias::ContactAlias;
pub use models::history_entry::HistoryEntry;
pub use models::new_user::NewUser;
pub use models::transaction_intent::TransactionIntent;
pub use models::user_profile::UserProfile;
pub use models::user_record::UserRecord;
pub use signup::SignupForm;

/// Minor units per major currency unit (cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
