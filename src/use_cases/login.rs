use std::sync::Arc;

use crate::domain::entities::AuthResult;
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;

// Login use case with the provider injected through the port.
pub struct LoginUseCase {
    pub provider: Arc<dyn IdentityProvider>,
}

impl LoginUseCase {
    pub async fn execute(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        // Missing fields short-circuit locally; the provider is never called.
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        self.provider
            .sign_in(email, password)
            .await
            .map_err(AuthError::Provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ProviderError, ProviderErrorCode};
    use crate::use_cases::test_support::FakeProvider;

    fn use_case(provider: &FakeProvider) -> LoginUseCase {
        LoginUseCase {
            provider: Arc::new(provider.clone()),
        }
    }

    #[tokio::test]
    async fn when_credentials_are_correct_then_returns_uid_and_verified_flag() {
        let provider = FakeProvider::new();
        let uid = provider.insert_account("x@y.com", "correct", true);

        let result = use_case(&provider)
            .execute("x@y.com", "correct")
            .await
            .expect("expected login to succeed");

        assert_eq!(result.uid, uid);
        assert!(result.email_verified);
    }

    #[tokio::test]
    async fn when_account_is_unverified_then_verified_flag_is_false() {
        let provider = FakeProvider::new();
        provider.insert_account("x@y.com", "correct", false);

        let result = use_case(&provider)
            .execute("x@y.com", "correct")
            .await
            .expect("expected login to succeed");

        assert!(!result.email_verified);
    }

    #[tokio::test]
    async fn when_password_is_wrong_then_returns_wrong_password() {
        let provider = FakeProvider::new();
        provider.insert_account("x@y.com", "correct", true);

        let result = use_case(&provider).execute("x@y.com", "incorrect").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Code(
                ProviderErrorCode::WrongPassword
            )))
        ));
    }

    #[tokio::test]
    async fn when_email_is_unknown_then_returns_user_not_found() {
        let provider = FakeProvider::new();

        let result = use_case(&provider).execute("nobody@y.com", "whatever").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Code(
                ProviderErrorCode::UserNotFound
            )))
        ));
    }

    #[tokio::test]
    async fn when_password_is_missing_then_fails_locally_without_provider_call() {
        let provider = FakeProvider::new();

        let result = use_case(&provider).execute("x@y.com", "").await;

        assert!(matches!(result, Err(AuthError::MissingCredentials)));
        assert_eq!(provider.counts().sign_in, 0);
    }

    #[tokio::test]
    async fn when_email_is_missing_then_fails_locally_without_provider_call() {
        let provider = FakeProvider::new();

        let result = use_case(&provider).execute("", "password").await;

        assert!(matches!(result, Err(AuthError::MissingCredentials)));
        assert_eq!(provider.counts().sign_in, 0);
    }
}
