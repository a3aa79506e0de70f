use crate::api::{gateway, identity};
use crate::{GatewayState, IdentityState};

use axum::{
    Router,
    routing::{get, post},
};

/// Router of the identity service
pub fn build_identity_router(state: IdentityState) -> Router {
    Router::new()
        .route("/users", post(identity::create_user::create_user))
        .route("/login", get(identity::login::login))
        .with_state(state)
}

/// Router of the public gateway
pub fn build_gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/home", get(gateway::home::home))
        .route("/payment", post(gateway::payment::payment))
        .route("/deposit", post(gateway::deposit::deposit))
        .route("/login", post(gateway::session::login))
        .route("/signup", post(gateway::session::signup))
        .route("/logout", post(gateway::session::logout))
        .with_state(state)
}
