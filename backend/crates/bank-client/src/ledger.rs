use crate::ClientResult;
use crate::http::{bearer, join_url, send};

use bank_core::TransactionIntent;

use log::debug;
use reqwest::Client as ReqwestClient;

const SERVICE: &str = "ledger";

/// Posts transaction intents to the ledger writer.
///
/// Exactly one attempt per call. The idempotency id travels in the body
/// for the ledger writer to deduplicate on; this client never resubmits.
#[derive(Clone)]
pub struct LedgerClient {
    base_url: String,
    client: ReqwestClient,
}

impl LedgerClient {
    pub fn new(client: ReqwestClient, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn submit(&self, token: &str, intent: &TransactionIntent) -> ClientResult<()> {
        debug!(
            "Submitting transaction {} of {} minor units",
            intent.idempotency_id, intent.amount_minor_units
        );
        let url = join_url(&self.base_url, "/transactions");
        let req = bearer(self.client.post(url), token).json(intent);
        send(SERVICE, req).await?;
        Ok(())
    }
}
