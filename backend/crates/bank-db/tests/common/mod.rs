#![allow(dead_code)]

use bank_core::{NewUser, UserProfile};
use bank_db::CredentialStore;

/// Store over a fresh in-memory database with migrations run
pub async fn create_test_store() -> CredentialStore {
    let pool = bank_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    CredentialStore::new(pool)
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: format!("$argon2id$v=19$stub${}", username),
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
    }
}
