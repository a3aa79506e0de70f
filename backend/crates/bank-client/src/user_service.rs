use crate::ClientResult;
use crate::http::{join_url, read_json, send, unwrap_error_envelope};

use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;

const SERVICE: &str = "userservice";

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Client for the identity service. Its rejections arrive in the API error
/// envelope and are unwrapped to the inner message.
#[derive(Clone)]
pub struct UserServiceClient {
    base_url: String,
    client: ReqwestClient,
}

impl UserServiceClient {
    pub fn new(client: ReqwestClient, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Exchange credentials for a signed session token.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<String> {
        debug!("Requesting token for {}", username);
        let url = join_url(&self.base_url, "/login");
        let req = self
            .client
            .get(url)
            .query(&[("username", username), ("password", password)]);
        let response = send(SERVICE, req).await.map_err(unwrap_error_envelope)?;
        let body: LoginResponse = read_json(SERVICE, response).await?;
        Ok(body.token)
    }

    /// Forward a signup form unchanged.
    pub async fn create_user(&self, fields: &[(String, String)]) -> ClientResult<()> {
        let url = join_url(&self.base_url, "/users");
        let req = self.client.post(url).form(fields);
        send(SERVICE, req).await.map_err(unwrap_error_envelope)?;
        Ok(())
    }
}
