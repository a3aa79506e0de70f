use serde::{Deserialize, Serialize};

/// One row of the transaction history reader's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i64>,
    #[serde(rename = "fromAccountNum")]
    pub from_account_number: String,
    #[serde(rename = "fromRoutingNum")]
    pub from_routing_number: String,
    #[serde(rename = "toAccountNum")]
    pub to_account_number: String,
    #[serde(rename = "toRoutingNum")]
    pub to_routing_number: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Filled in for display by `populate_contact_labels`.
    #[serde(default)]
    pub account_label: Option<String>,
}
