//! Validation of signup form input.

use crate::{CoreError, Result, UserProfile};

use std::collections::HashMap;
use std::fmt;

pub const USERNAME_MIN_LEN: usize = 2;
pub const USERNAME_MAX_LEN: usize = 15;

/// Form fields required to create an account, in validation order.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "username",
    "password",
    "password-repeat",
    "firstname",
    "lastname",
    "birthday",
    "timezone",
    "address",
    "state",
    "zip",
    "ssn",
];

/// A signup request that passed validation. Still holds the plaintext
/// password, which must go straight to the hasher.
#[derive(Clone)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub profile: UserProfile,
}

impl SignupForm {
    /// Validate raw form fields.
    ///
    /// Checks, in order: every field present, every field non-blank,
    /// username shape, matching passwords.
    #[track_caller]
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        if REQUIRED_FIELDS.iter().any(|f| !fields.contains_key(*f)) {
            return Err(CoreError::validation("missing required field(s)"));
        }

        let value = |name: &str| field_value(fields, name);

        if REQUIRED_FIELDS.iter().any(|f| value(*f).trim().is_empty()) {
            return Err(CoreError::validation("missing value for input field(s)"));
        }

        let username = value("username");
        if !is_valid_username(username) {
            return Err(CoreError::validation_field(
                "username",
                "username must contain 2-15 alphanumeric characters or underscores",
            ));
        }

        if value("password") != value("password-repeat") {
            return Err(CoreError::validation_field(
                "password-repeat",
                "passwords do not match",
            ));
        }

        Ok(Self {
            username: username.to_string(),
            password: value("password").to_string(),
            profile: UserProfile {
                first_name: value("firstname").to_string(),
                last_name: value("lastname").to_string(),
                birthday: value("birthday").to_string(),
                timezone: value("timezone").to_string(),
                address: value("address").to_string(),
                state: value("state").to_string(),
                zip: value("zip").to_string(),
                tax_id: value("ssn").to_string(),
            },
        })
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn field_value<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or_default()
}

/// 2-15 ASCII letters, digits or underscores.
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
