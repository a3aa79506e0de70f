use serde::{Deserialize, Serialize};

/// A labeled payee/payer saved in the contact registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAlias {
    pub label: String,
    #[serde(rename = "account_num")]
    pub account_number: String,
    #[serde(rename = "routing_num")]
    pub routing_number: String,
    #[serde(default)]
    pub is_external: bool,
}
