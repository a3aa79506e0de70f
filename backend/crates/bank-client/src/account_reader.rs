use crate::ClientResult;
use crate::http::{bearer, join_url, read_json, send};

use bank_core::HistoryEntry;

use reqwest::Client as ReqwestClient;

const BALANCE_SERVICE: &str = "balancereader";
const HISTORY_SERVICE: &str = "transactionhistory";

/// Read side of the ledger: current balance and transaction history.
#[derive(Clone)]
pub struct AccountReader {
    balances_url: String,
    history_url: String,
    client: ReqwestClient,
}

impl AccountReader {
    pub fn new(client: ReqwestClient, balances_url: &str, history_url: &str) -> Self {
        Self {
            balances_url: balances_url.trim_end_matches('/').to_string(),
            history_url: history_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Balance in minor units.
    pub async fn balance(&self, token: &str, account_id: &str) -> ClientResult<i64> {
        let url = join_url(&self.balances_url, &format!("/balances/{}", account_id));
        let response = send(BALANCE_SERVICE, bearer(self.client.get(url), token)).await?;
        read_json(BALANCE_SERVICE, response).await
    }

    pub async fn history(&self, token: &str, account_id: &str) -> ClientResult<Vec<HistoryEntry>> {
        let url = join_url(&self.history_url, &format!("/transactions/{}", account_id));
        let response = send(HISTORY_SERVICE, bearer(self.client.get(url), token)).await?;
        read_json(HISTORY_SERVICE, response).await
    }
}
