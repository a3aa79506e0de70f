#![allow(dead_code)]

//! Test infrastructure for bank-server API tests

use bank_auth::{HashParams, PasswordHasher, TokenIssuer, TokenVerifier};
use bank_client::{
    AccountReader, ContactRegistryClient, LedgerClient, UserServiceClient, build_http_client,
};
use bank_core::{NewUser, UserProfile, UserRecord};
use bank_db::CredentialStore;
use bank_server::{GatewayState, IdentityState, TransactionOrchestrator};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use wiremock::MockServer;

pub const ISSUER_PRIVATE_PEM: &str = include_str!("../../../test-keys/issuer_private.pem");
pub const ISSUER_PUBLIC_PEM: &str = include_str!("../../../test-keys/issuer_public.pem");

pub const LOCAL_ROUTING: &str = "883745000";
pub const ACCOUNT_ID: &str = "1234567890";
pub const USERNAME: &str = "alice";

pub async fn create_test_store() -> CredentialStore {
    let pool = bank_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    CredentialStore::new(pool)
}

pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid params")
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::with_rs256(ISSUER_PRIVATE_PEM, 3600).expect("valid test key")
}

pub fn verifier() -> TokenVerifier {
    TokenVerifier::with_rs256(ISSUER_PUBLIC_PEM).expect("valid test key")
}

pub async fn create_identity_state() -> IdentityState {
    IdentityState {
        store: create_test_store().await,
        hasher: fast_hasher(),
        issuer: Arc::new(issuer()),
    }
}

pub async fn seed_user(state: &IdentityState, username: &str, password: &str) -> String {
    let user = NewUser {
        username: username.to_string(),
        password_hash: state.hasher.hash(password).expect("hash"),
        profile: profile(),
    };
    state.store.insert(&user).await.expect("insert")
}

/// Gateway whose collaborators all live on `server`.
pub fn create_gateway_state(server: &MockServer, timeout: Duration) -> GatewayState {
    let client = build_http_client(timeout).expect("http client");
    let uri = server.uri();
    let verifier = Arc::new(verifier());
    let contacts = ContactRegistryClient::new(client.clone(), &uri);
    let ledger = LedgerClient::new(client.clone(), &uri);

    GatewayState {
        verifier: verifier.clone(),
        orchestrator: Arc::new(TransactionOrchestrator::new(
            verifier,
            contacts.clone(),
            ledger,
            LOCAL_ROUTING,
        )),
        contacts,
        accounts: AccountReader::new(client.clone(), &uri, &uri),
        users: UserServiceClient::new(client, &uri),
        cookie_name: "token".to_string(),
    }
}

/// A live token for alice
pub fn alice_token() -> String {
    issuer().issue(&alice()).expect("issue").token
}

pub fn alice_token_issued_at(issued_at: i64) -> String {
    issuer().issue_at(&alice(), issued_at).expect("issue").token
}

pub fn alice() -> UserRecord {
    UserRecord {
        account_id: ACCOUNT_ID.to_string(),
        username: USERNAME.to_string(),
        password_hash: String::new(),
        profile: profile(),
    }
}

fn profile() -> UserProfile {
    UserProfile {
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        birthday: "1990-01-01".to_string(),
        timezone: "UTC".to_string(),
        address: "1 Test Street".to_string(),
        state: "CA".to_string(),
        zip: "94000".to_string(),
        tax_id: "000-00-0000".to_string(),
    }
}

/// POST an urlencoded form, optionally carrying the session cookie
pub fn form_request(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("token={}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("token={}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string()
}
