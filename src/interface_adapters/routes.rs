use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::interface_adapters::handlers::{forgot_password, greeting, login, register};
use crate::interface_adapters::middleware::require_api_key;
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes to their handlers; every matched route sits
    // behind the gateway key check.
    Router::new()
        .route("/api/node", get(greeting))
        .route("/api/node/firebase_register", post(register))
        .route("/api/node/firebase_login", post(login))
        .route("/api/node/firebase_forgot-password", post(forgot_password))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}
