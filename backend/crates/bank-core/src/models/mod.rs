pub mod contact_alias;
pub mod history_entry;
pub mod new_user;
pub mod transaction_intent;
pub mod user_profile;
pub mod user_record;
