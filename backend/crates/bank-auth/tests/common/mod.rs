#![allow(dead_code)]

use bank_auth::{HashParams, PasswordHasher, TokenIssuer, TokenVerifier};
use bank_core::{NewUser, UserProfile};
use bank_db::CredentialStore;

pub const ISSUER_PRIVATE_PEM: &str = include_str!("../../../../test-keys/issuer_private.pem");
pub const ISSUER_PUBLIC_PEM: &str = include_str!("../../../../test-keys/issuer_public.pem");

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

/// Insert `username` with `password` and return its account id
pub async fn seed_user(
    store: &CredentialStore,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> String {
    let user = NewUser {
        username: username.to_string(),
        password_hash: hasher.hash(password).expect("hash"),
        profile: UserProfile {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            birthday: "1990-01-01".to_string(),
            timezone: "UTC".to_string(),
            address: "1 Test Street".to_string(),
            state: "CA".to_string(),
            zip: "94000".to_string(),
            tax_id: "000-00-0000".to_string(),
        },
    };
    store.insert(&user).await.expect("insert")
}
