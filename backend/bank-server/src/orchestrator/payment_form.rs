use super::{optional, required};
use crate::TransferFailure;

use bank_core::parse_minor_units;

use serde::Deserialize;

/// Recipient value meaning "a new recipient, given in the contact fields".
pub const NEW_RECIPIENT: &str = "add";

/// Raw `POST /payment` form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentForm {
    /// Recipient account number, or `add`
    pub account_num: Option<String>,
    pub contact_account_num: Option<String>,
    /// When set with `add`, the recipient is saved as a contact
    pub contact_label: Option<String>,
    /// Display amount, e.g. `12.34`
    pub amount: Option<String>,
    pub uuid: Option<String>,
}

/// A payment form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlan {
    pub recipient_account: String,
    pub new_contact_label: Option<String>,
    pub amount_minor_units: i64,
    pub idempotency_id: String,
}

impl PaymentForm {
    #[track_caller]
    pub fn validate(&self) -> Result<PaymentPlan, TransferFailure> {
        let account_num = required(&self.account_num, "account_num")?;

        let (recipient_account, new_contact_label) = if account_num == NEW_RECIPIENT {
            (
                required(&self.contact_account_num, "contact_account_num")?,
                optional(&self.contact_label),
            )
        } else {
            (account_num, None)
        };

        let amount = self.amount.as_deref().unwrap_or_default();
        let amount_minor_units = parse_minor_units(amount)?;
        let idempotency_id = required(&self.uuid, "uuid")?;

        Ok(PaymentPlan {
            recipient_account,
            new_contact_label,
            amount_minor_units,
            idempotency_id,
        })
    }
}
