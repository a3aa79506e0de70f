use crate::UserProfile;

use std::fmt;

/// A stored user account.
///
/// Deliberately not `Serialize`: the password hash never leaves the
/// identity service.
#[derive(Clone)]
pub struct UserRecord {
    pub account_id: String,
    pub username: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        self.profile.display_name()
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("account_id", &self.account_id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish_non_exhaustive()
    }
}
