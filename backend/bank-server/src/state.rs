use crate::TransactionOrchestrator;

use bank_auth::{PasswordHasher, TokenIssuer, TokenVerifier};
use bank_client::{AccountReader, ContactRegistryClient, UserServiceClient};
use bank_db::CredentialStore;

use std::sync::Arc;

/// State of the identity service: the only holder of the signing key.
#[derive(Clone)]
pub struct IdentityState {
    pub store: CredentialStore,
    pub hasher: PasswordHasher,
    pub issuer: Arc<TokenIssuer>,
}

/// State of the public gateway. Holds only the verifying half of the key.
#[derive(Clone)]
pub struct GatewayState {
    pub verifier: Arc<TokenVerifier>,
    pub orchestrator: Arc<TransactionOrchestrator>,
    pub contacts: ContactRegistryClient,
    pub accounts: AccountReader,
    pub users: UserServiceClient,
    pub cookie_name: String,
}
