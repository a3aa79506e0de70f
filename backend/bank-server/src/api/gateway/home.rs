//! GET /home

use crate::{ApiResult, Caller, GatewayState};

use bank_client::ClientResult;
use bank_core::{ContactAlias, HistoryEntry, populate_contact_labels};

use axum::{Json, extract::State};
use log::{debug, warn};
use serde::Serialize;

/// Everything the account overview needs. A reader that failed leaves its
/// field `null`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub name: String,
    pub username: String,
    pub account_id: String,
    /// Minor units
    pub balance: Option<i64>,
    pub history: Option<Vec<HistoryEntry>>,
    pub contacts: Option<Vec<ContactAlias>>,
}

pub async fn home(
    State(state): State<GatewayState>,
    caller: Caller,
) -> ApiResult<Json<HomeResponse>> {
    let Caller { claims, token } = caller;
    let account_id = claims.account_id.as_str();

    let (balance, history, contacts) = tokio::join!(
        state.accounts.balance(&token, account_id),
        state.accounts.history(&token, account_id),
        state.contacts.list(&token, &claims.subject_username),
    );

    let balance = degrade("balance", balance);
    let mut history = degrade("history", history);
    let contacts = degrade("contacts", contacts);

    debug!("Populating contact labels");
    populate_contact_labels(
        Some(account_id),
        history.as_deref_mut(),
        contacts.as_deref(),
    );

    Ok(Json(HomeResponse {
        name: claims.display_name.clone(),
        username: claims.subject_username.clone(),
        account_id: claims.account_id.clone(),
        balance,
        history,
        contacts,
    }))
}

fn degrade<T>(what: &str, result: ClientResult<T>) -> Option<T> {
    result
        .map_err(|e| warn!("Error reading {} data: {}", what, e))
        .ok()
}
