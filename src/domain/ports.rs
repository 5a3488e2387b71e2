use async_trait::async_trait;

use crate::domain::entities::{AuthResult, NewAccount};
use crate::domain::errors::ProviderError;

// Port for the external identity provider used by the gateway use cases.
// Handlers depend on this trait, not the concrete client implementation.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<NewAccount, ProviderError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ProviderError>;
    async fn send_verification_email(&self, id_token: &str) -> Result<(), ProviderError>;
    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError>;
    async fn delete_account(&self, id_token: &str) -> Result<(), ProviderError>;
}
