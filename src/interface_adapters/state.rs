use std::sync::Arc;

use crate::domain::ports::IdentityProvider;

// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub provider: Arc<dyn IdentityProvider>,
    // Static gateway credential checked on every request; read-only after startup.
    pub gateway_api_key: String,
}
