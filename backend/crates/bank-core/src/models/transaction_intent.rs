use serde::Serialize;

/// A request to move money, handed to the ledger writer.
///
/// Field names on the wire follow the ledger writer's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionIntent {
    #[serde(rename = "fromAccountNum")]
    pub from_account_number: String,
    #[serde(rename = "fromRoutingNum")]
    pub from_routing_number: String,
    #[serde(rename = "toAccountNum")]
    pub to_account_number: String,
    #[serde(rename = "toRoutingNum")]
    pub to_routing_number: String,
    #[serde(rename = "amount")]
    pub amount_minor_units: i64,
    /// Deduplication is the ledger writer's job; it is only forwarded here.
    #[serde(rename = "uuid")]
    pub idempotency_id: String,
}
