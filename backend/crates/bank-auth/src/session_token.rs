use crate::Claims;

use std::fmt;

/// A freshly issued signed token together with the claims it carries.
#[derive(Clone)]
pub struct SessionToken {
    pub token: String,
    pub claims: Claims,
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"<redacted>")
            .field("claims", &self.claims)
            .finish()
    }
}
