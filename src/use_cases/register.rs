use std::sync::Arc;

use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;

// Response returned by the register use case.
pub struct RegisterResponse {
    pub uid: String,
}

// Registration use case with the provider injected through the port.
// Field presence is not pre-validated here: the provider reports
// missing email/password with its own codes.
pub struct RegisterUseCase {
    pub provider: Arc<dyn IdentityProvider>,
}

impl RegisterUseCase {
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, AuthError> {
        let account = self
            .provider
            .sign_up(email, password)
            .await
            .map_err(AuthError::Provider)?;

        if let Err(err) = self.provider.send_verification_email(&account.id_token).await {
            // Roll back the half-created account so the client can retry
            // cleanly; best-effort, the original failure is what we report.
            let _ = self.provider.delete_account(&account.id_token).await;
            return Err(AuthError::Provider(err));
        }

        Ok(RegisterResponse { uid: account.uid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ProviderError, ProviderErrorCode};
    use crate::use_cases::test_support::{FailureFlags, FakeProvider};

    fn use_case(provider: &FakeProvider) -> RegisterUseCase {
        RegisterUseCase {
            provider: Arc::new(provider.clone()),
        }
    }

    #[tokio::test]
    async fn when_payload_is_valid_then_account_is_created_and_verification_email_sent() {
        let provider = FakeProvider::new();

        let result = use_case(&provider)
            .execute("a@b.com", "Str0ngEnough")
            .await
            .expect("expected registration to succeed");

        let saved = provider
            .account("a@b.com")
            .expect("expected account to be created");
        assert_eq!(result.uid, saved.uid);
        assert!(!saved.email_verified);
        assert_eq!(provider.counts().verification_emails, 1);
    }

    #[tokio::test]
    async fn when_email_is_already_registered_then_returns_email_exists() {
        let provider = FakeProvider::new();
        provider.insert_account("a@b.com", "Str0ngEnough", false);

        let result = use_case(&provider).execute("a@b.com", "0therPassword").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Code(
                ProviderErrorCode::EmailExists
            )))
        ));
    }

    #[tokio::test]
    async fn when_password_is_weak_then_returns_weak_password_and_sends_no_email() {
        let provider = FakeProvider::new();

        let result = use_case(&provider).execute("a@b.com", "Weak1").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Code(
                ProviderErrorCode::WeakPassword
            )))
        ));
        assert_eq!(provider.counts().verification_emails, 0);
    }

    #[tokio::test]
    async fn when_password_is_missing_then_provider_reports_missing_password() {
        let provider = FakeProvider::new();

        let result = use_case(&provider).execute("a@b.com", "").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Code(
                ProviderErrorCode::MissingPassword
            )))
        ));
        // Absence is reported by the provider, so one call was made.
        assert_eq!(provider.counts().sign_up, 1);
    }

    #[tokio::test]
    async fn when_verification_email_fails_then_account_is_rolled_back() {
        let provider = FakeProvider::new().with_failures(FailureFlags {
            verification_email: true,
            ..FailureFlags::default()
        });

        let result = use_case(&provider).execute("a@b.com", "Str0ngEnough").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Transport(_)))
        ));
        assert!(provider.account("a@b.com").is_none());
        assert_eq!(provider.counts().deletes, 1);
    }

    #[tokio::test]
    async fn when_rollback_delete_also_fails_then_original_error_is_still_reported() {
        let provider = FakeProvider::new().with_failures(FailureFlags {
            verification_email: true,
            delete: true,
            ..FailureFlags::default()
        });

        let result = use_case(&provider).execute("a@b.com", "Str0ngEnough").await;

        assert!(matches!(
            result,
            Err(AuthError::Provider(ProviderError::Transport(_)))
        ));
        assert_eq!(provider.counts().deletes, 1);
    }
}
