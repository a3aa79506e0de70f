//! Public gateway: sessions, account overview, payments and deposits.

use bank_auth::TokenVerifier;
use bank_client::{
    AccountReader, ContactRegistryClient, LedgerClient, UserServiceClient, build_http_client,
};
use bank_config::Config;
use bank_server::error::Result as ServerErrorResult;
use bank_server::{GatewayState, TransactionOrchestrator, build_gateway_router, logger, serve::serve};

use std::sync::Arc;
use std::time::Duration;

use log::info;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate_gateway()?;

    // Initialize logger (before any other logging)
    let log_file_path = logger::log_file_path(&config)?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting frontend v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let verifier = Arc::new(TokenVerifier::with_rs256(&config.public_key_pem()?)?);
    info!("JWT: RS256 verification enabled");

    let services = &config.services;
    let http = build_http_client(Duration::from_secs(services.backend_timeout_secs))?;

    let contacts = ContactRegistryClient::new(http.clone(), &services.contacts_url);
    let ledger = LedgerClient::new(http.clone(), &services.transactions_url);
    let orchestrator = TransactionOrchestrator::new(
        verifier.clone(),
        contacts.clone(),
        ledger,
        config.banking.require_local_routing_number()?,
    );

    let state = GatewayState {
        verifier,
        orchestrator: Arc::new(orchestrator),
        contacts,
        accounts: AccountReader::new(http.clone(), &services.balances_url, &services.history_url),
        users: UserServiceClient::new(http, &services.userservice_url),
        cookie_name: config.banking.token_cookie_name.clone(),
    };

    serve(build_gateway_router(state), &config.bind_addr()).await?;

    Ok(())
}
