use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{AuthResult, NewAccount};
use crate::domain::errors::{ProviderError, ProviderErrorCode};
use crate::domain::ports::IdentityProvider;

// Account row held by the in-memory fake provider.
#[derive(Clone)]
pub(crate) struct FakeAccount {
    pub(crate) password: String,
    pub(crate) uid: String,
    pub(crate) email_verified: bool,
}

// Per-operation call counters so tests can assert which provider
// operations ran and how often.
#[derive(Clone, Copy, Default)]
pub(crate) struct CallCounts {
    pub(crate) sign_up: usize,
    pub(crate) sign_in: usize,
    pub(crate) verification_emails: usize,
    pub(crate) password_resets: usize,
    pub(crate) deletes: usize,
}

// Toggles used by negative-path tests to simulate provider failure.
#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub(crate) verification_email: bool,
    pub(crate) delete: bool,
    pub(crate) transport: bool,
}

struct FakeState {
    accounts: HashMap<String, FakeAccount>,
    counts: CallCounts,
    next_uid: u32,
}

// In-memory identity provider that mirrors the upstream's observable
// behavior: duplicate emails, weak passwords, unknown accounts, and
// wrong credentials fail with the corresponding provider code.
#[derive(Clone)]
pub(crate) struct FakeProvider {
    state: Arc<Mutex<FakeState>>,
    failures: FailureFlags,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                accounts: HashMap::new(),
                counts: CallCounts::default(),
                next_uid: 1,
            })),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    // Seed an account as if it had registered earlier, returning its uid.
    pub(crate) fn insert_account(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
        email_verified: bool,
    ) -> String {
        let mut state = self.state.lock().expect("fake state mutex poisoned");
        let uid = format!("uid-{}", state.next_uid);
        state.next_uid += 1;
        state.accounts.insert(
            email.into(),
            FakeAccount {
                password: password.into(),
                uid: uid.clone(),
                email_verified,
            },
        );
        uid
    }

    pub(crate) fn counts(&self) -> CallCounts {
        let state = self.state.lock().expect("fake state mutex poisoned");
        state.counts
    }

    pub(crate) fn account(&self, email: &str) -> Option<FakeAccount> {
        let state = self.state.lock().expect("fake state mutex poisoned");
        state.accounts.get(email).cloned()
    }
}

// Fake id tokens carry the email so later calls can find the account.
fn fake_token(email: &str) -> String {
    format!("token:{email}")
}

fn email_from_token(id_token: &str) -> Option<&str> {
    id_token.strip_prefix("token:")
}

fn code(code: ProviderErrorCode) -> ProviderError {
    ProviderError::Code(code)
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<NewAccount, ProviderError> {
        let mut state = self.state.lock().expect("fake state mutex poisoned");
        state.counts.sign_up += 1;

        if self.failures.transport {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }
        if email.is_empty() {
            return Err(code(ProviderErrorCode::MissingEmail));
        }
        if password.is_empty() {
            return Err(code(ProviderErrorCode::MissingPassword));
        }
        if !email.contains('@') {
            return Err(code(ProviderErrorCode::InvalidEmail));
        }
        // Upstream policy: passwords shorter than six characters are rejected.
        if password.chars().count() < 6 {
            return Err(code(ProviderErrorCode::WeakPassword));
        }
        if state.accounts.contains_key(email) {
            return Err(code(ProviderErrorCode::EmailExists));
        }

        let uid = format!("uid-{}", state.next_uid);
        state.next_uid += 1;
        state.accounts.insert(
            email.to_string(),
            FakeAccount {
                password: password.to_string(),
                uid: uid.clone(),
                email_verified: false,
            },
        );

        Ok(NewAccount {
            uid,
            id_token: fake_token(email),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ProviderError> {
        let mut state = self.state.lock().expect("fake state mutex poisoned");
        state.counts.sign_in += 1;

        if self.failures.transport {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }

        let account = state
            .accounts
            .get(email)
            .ok_or_else(|| code(ProviderErrorCode::UserNotFound))?;
        if account.password != password {
            return Err(code(ProviderErrorCode::WrongPassword));
        }

        Ok(AuthResult {
            uid: account.uid.clone(),
            email_verified: account.email_verified,
        })
    }

    async fn send_verification_email(&self, id_token: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock().expect("fake state mutex poisoned");

        if self.failures.verification_email {
            return Err(ProviderError::Transport(
                "verification email dispatch failed".to_string(),
            ));
        }

        let known = email_from_token(id_token)
            .map(|email| state.accounts.contains_key(email))
            .unwrap_or(false);
        if !known {
            return Err(code(ProviderErrorCode::Other("INVALID_ID_TOKEN".to_string())));
        }

        state.counts.verification_emails += 1;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock().expect("fake state mutex poisoned");

        if self.failures.transport {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }
        if !state.accounts.contains_key(email) {
            return Err(code(ProviderErrorCode::UserNotFound));
        }

        state.counts.password_resets += 1;
        Ok(())
    }

    async fn delete_account(&self, id_token: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock().expect("fake state mutex poisoned");
        state.counts.deletes += 1;

        if self.failures.delete {
            return Err(ProviderError::Transport("delete failed".to_string()));
        }

        if let Some(email) = email_from_token(id_token) {
            state.accounts.remove(email);
        }
        Ok(())
    }
}
