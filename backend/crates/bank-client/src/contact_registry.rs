use crate::ClientResult;
use crate::http::{bearer, join_url, read_json, send};

use bank_core::ContactAlias;

use log::debug;
use reqwest::Client as ReqwestClient;

const SERVICE: &str = "contacts";

/// Client for the contact registry, which stores each user's saved payees
/// and external accounts.
#[derive(Clone)]
pub struct ContactRegistryClient {
    base_url: String,
    client: ReqwestClient,
}

impl ContactRegistryClient {
    pub fn new(client: ReqwestClient, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, username: &str) -> String {
        join_url(&self.base_url, &format!("/contacts/{}", username))
    }

    /// Contacts saved by `username`.
    pub async fn list(&self, token: &str, username: &str) -> ClientResult<Vec<ContactAlias>> {
        let req = bearer(self.client.get(self.url(username)), token);
        let response = send(SERVICE, req).await?;
        read_json(SERVICE, response).await
    }

    /// Save a new contact for `username`. Duplicates are the registry's
    /// concern; they are not checked here.
    pub async fn create(
        &self,
        token: &str,
        username: &str,
        contact: &ContactAlias,
    ) -> ClientResult<()> {
        debug!("Adding new contact '{}' for {}", contact.label, username);
        let req = bearer(self.client.post(self.url(username)), token).json(contact);
        send(SERVICE, req).await?;
        Ok(())
    }
}
