use super::{optional, required};
use crate::TransferFailure;

use bank_core::parse_minor_units;

use serde::Deserialize;

/// Account value meaning "a new external account, given in the external fields".
pub const NEW_ACCOUNT: &str = "add";

/// Raw `POST /deposit` form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepositForm {
    /// `add`, or a saved account as `{"account_num": .., "routing_num": ..}`
    pub account: Option<String>,
    pub external_account_num: Option<String>,
    pub external_routing_num: Option<String>,
    pub external_label: Option<String>,
    pub amount: Option<String>,
    pub uuid: Option<String>,
}

#[derive(Deserialize)]
struct SavedAccount {
    account_num: String,
    routing_num: String,
}

/// A deposit form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositPlan {
    pub source_account: String,
    pub source_routing: String,
    /// Form field the routing number came from
    pub routing_field: &'static str,
    pub new_contact_label: Option<String>,
    pub amount_minor_units: i64,
    pub idempotency_id: String,
}

impl DepositForm {
    #[track_caller]
    pub fn validate(&self) -> Result<DepositPlan, TransferFailure> {
        let account = required(&self.account, "account")?;

        let (source_account, source_routing, routing_field, new_contact_label) =
            if account == NEW_ACCOUNT {
                (
                    required(&self.external_account_num, "external_account_num")?,
                    required(&self.external_routing_num, "external_routing_num")?,
                    "external_routing_num",
                    optional(&self.external_label),
                )
            } else {
                let saved: SavedAccount = serde_json::from_str(&account).map_err(|_| {
                    TransferFailure::validation("invalid account details", Some("account"))
                })?;
                (
                    saved.account_num.trim().to_string(),
                    saved.routing_num.trim().to_string(),
                    "account",
                    None,
                )
            };

        if source_account.is_empty() || source_routing.is_empty() {
            return Err(TransferFailure::validation(
                "invalid account details",
                Some("account"),
            ));
        }

        let amount = self.amount.as_deref().unwrap_or_default();
        let amount_minor_units = parse_minor_units(amount)?;
        let idempotency_id = required(&self.uuid, "uuid")?;

        Ok(DepositPlan {
            source_account,
            source_routing,
            routing_field,
            new_contact_label,
            amount_minor_units,
            idempotency_id,
        })
    }
}
