//! Identity service: account creation and token issuance.

use bank_auth::{HashParams, PasswordHasher, TokenIssuer};
use bank_config::Config;
use bank_db::CredentialStore;
use bank_server::error::Result as ServerErrorResult;
use bank_server::{IdentityState, build_identity_router, logger, serve::serve};

use std::sync::Arc;

use log::info;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate_identity()?;

    // Initialize logger (before any other logging)
    let log_file_path = logger::log_file_path(&config)?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting userservice v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = bank_db::connect(&database_path).await?;
    info!("Database connection established");

    let hasher = PasswordHasher::new(HashParams {
        memory_kib: config.auth.hash_memory_kib,
        iterations: config.auth.hash_iterations,
        parallelism: config.auth.hash_parallelism,
    })?;

    let issuer = TokenIssuer::with_rs256(&config.private_key_pem()?, config.auth.token_lifetime_secs)?;
    info!("JWT: RS256 signing enabled");

    let state = IdentityState {
        store: CredentialStore::new(pool),
        hasher,
        issuer: Arc::new(issuer),
    };

    serve(build_identity_router(state), &config.bind_addr()).await?;

    Ok(())
}
