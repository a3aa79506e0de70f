/// Personal fields captured at signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub timezone: String,
    pub address: String,
    pub state: String,
    pub zip: String,
    pub tax_id: String,
}

impl UserProfile {
    /// Name shown to the user once logged in.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
