pub mod api;
pub mod error;
pub mod logger;
pub mod orchestrator;
pub mod routes;
pub mod serve;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        caller::{Caller, PresentedToken},
        cookie::{clear_session_cookie, cookie_value, session_cookie},
    },
    gateway::{
        deposit::deposit,
        home::{HomeResponse, home},
        payment::payment,
        session::{login, logout, signup},
    },
    identity::{create_user::create_user, login::login as identity_login},
};
pub use orchestrator::{
    deposit_form::DepositForm, payment_form::PaymentForm,
    transaction_orchestrator::{TransactionOrchestrator, VerifiedCaller},
    transfer_failure::TransferFailure,
};
pub use routes::{build_gateway_router, build_identity_router};
pub use state::{GatewayState, IdentityState};
