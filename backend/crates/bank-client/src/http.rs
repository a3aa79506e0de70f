use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Build the shared outbound client with the configured per-request timeout.
#[track_caller]
pub fn build_http_client(timeout: Duration) -> ClientResult<ReqwestClient> {
    ReqwestClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::from_reqwest("http client", e))
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub(crate) fn bearer(req: RequestBuilder, token: &str) -> RequestBuilder {
    req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Send a request and turn transport failures and non-2xx statuses into
/// `ClientError`s. A rejection carries the response body verbatim.
pub(crate) async fn send(service: &'static str, req: RequestBuilder) -> ClientResult<Response> {
    let response = req
        .send()
        .await
        .map_err(|e| ClientError::from_reqwest(service, e))?;

    let status = response.status();
    if status.is_success() {
        debug!("{} responded {}", service, status);
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|e| {
        warn!("Failed to read {} rejection body: {}", service, e);
        String::new()
    });
    Err(ClientError::rejected(service, status.as_u16(), body))
}

/// Read a successful response body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> ClientResult<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_reqwest(service, e))?;
    serde_json::from_str(&body).map_err(|e| ClientError::from_json(service, e))
}

/// For collaborators that answer in the `{"error": {"message": ..}}`
/// envelope: replace a rejection's body with the enveloped message.
pub(crate) fn unwrap_error_envelope(err: ClientError) -> ClientError {
    match err {
        ClientError::Rejected {
            service,
            status,
            message,
            location,
        } => ClientError::Rejected {
            service,
            status,
            message: envelope_message(&message),
            location,
        },
        other => other,
    }
}

/// The enveloped message, or the trimmed body when there is no envelope.
pub(crate) fn envelope_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) = value
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
    {
        return message.to_string();
    }

    body.trim().to_string()
}
