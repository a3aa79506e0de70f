use crate::{ContactAlias, HistoryEntry};

use std::collections::HashMap;

/// Annotate each history entry with the label of its counterparty.
///
/// The counterparty is whichever side is not `account_id`. Entries with no
/// matching contact get `None`. If any input is missing nothing happens.
pub fn populate_contact_labels(
    account_id: Option<&str>,
    transactions: Option<&mut [HistoryEntry]>,
    contacts: Option<&[ContactAlias]>,
) {
    let (Some(account_id), Some(transactions), Some(contacts)) =
        (account_id, transactions, contacts)
    else {
        return;
    };

    let labels: HashMap<&str, &str> = contacts
        .iter()
        .map(|c| (c.account_number.as_str(), c.label.as_str()))
        .collect();

    for entry in transactions.iter_mut() {
        let counterparty = if entry.to_account_number == account_id {
            &entry.from_account_number
        } else if entry.from_account_number == account_id {
            &entry.to_account_number
        } else {
            continue;
        };

        entry.account_label = labels.get(counterparty.as_str()).map(|l| l.to_string());
    }
}
