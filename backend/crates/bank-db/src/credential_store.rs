use crate::{ACCOUNT_ID_DIGITS, DbError, MAX_ACCOUNT_ID_ATTEMPTS, Result};

use bank_core::{NewUser, UserProfile, UserRecord};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, warn};
use rand::Rng;
use sqlx::SqlitePool;

/// Durable store of user accounts.
///
/// Duplicate usernames are detected only by the unique index on
/// `users.username`; there is no read-before-write check.
#[derive(Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    account_id: String,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    birthday: String,
    timezone: String,
    address: String,
    state: String,
    zip: String,
    tax_id: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            account_id: row.account_id,
            username: row.username,
            password_hash: row.password_hash,
            profile: UserProfile {
                first_name: row.first_name,
                last_name: row.last_name,
                birthday: row.birthday,
                timezone: row.timezone,
                address: row.address,
                state: row.state,
                zip: row.zip,
                tax_id: row.tax_id,
            },
        }
    }
}

impl CredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Exact, case-sensitive username lookup.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT account_id, username, password_hash, first_name, last_name,
                     birthday, timezone, address, state, zip, tax_id
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    /// Insert a new user and return its freshly generated account id.
    ///
    /// Fails with `UsernameTaken` when the unique index rejects the
    /// username. An account id collision is retried with a new id.
    pub async fn insert(&self, user: &NewUser) -> Result<String> {
        let created_at = Utc::now().timestamp();

        for attempt in 1..=MAX_ACCOUNT_ID_ATTEMPTS {
            let account_id = Self::generate_account_id();

            let result = sqlx::query(
                r#"
                  INSERT INTO users (
                      account_id, username, password_hash, first_name, last_name,
                      birthday, timezone, address, state, zip, tax_id, created_at
                  ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&account_id)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.profile.first_name)
            .bind(&user.profile.last_name)
            .bind(&user.profile.birthday)
            .bind(&user.profile.timezone)
            .bind(&user.profile.address)
            .bind(&user.profile.state)
            .bind(&user.profile.zip)
            .bind(&user.profile.tax_id)
            .bind(created_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => {
                    debug!("Inserted user {} as account {}", user.username, account_id);
                    return Ok(account_id);
                }
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    if db_err.message().contains("users.username") {
                        return Err(DbError::UsernameTaken {
                            username: user.username.clone(),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    warn!(
                        "Account id collision on attempt {}/{}, regenerating",
                        attempt, MAX_ACCOUNT_ID_ATTEMPTS
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DbError::AccountIdExhausted {
            attempts: MAX_ACCOUNT_ID_ATTEMPTS,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Random ten-digit account id with no leading zero.
    pub fn generate_account_id() -> String {
        let low = 10u64.pow(ACCOUNT_ID_DIGITS - 1);
        let high = 10u64.pow(ACCOUNT_ID_DIGITS);
        rand::rng().random_range(low..high).to_string()
    }
}
