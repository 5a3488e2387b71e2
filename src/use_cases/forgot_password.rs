use std::sync::Arc;

use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;

// Forgot-password use case with the provider injected through the port.
pub struct ForgotPasswordUseCase {
    pub provider: Arc<dyn IdentityProvider>,
}

impl ForgotPasswordUseCase {
    pub async fn execute(&self, email: &str) -> Result<(), AuthError> {
        // Missing email short-circuits locally; the provider is never called.
        if email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }

        self.provider
            .send_password_reset(email)
            .await
            .map_err(AuthError::Provider)
    }
}
