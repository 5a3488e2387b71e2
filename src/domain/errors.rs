use std::fmt;

// Provider error codes the gateway classifies. Anything the provider
// returns outside this set lands in Other and maps to a 500.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderErrorCode {
    EmailExists,
    InvalidEmail,
    WeakPassword,
    MissingPassword,
    MissingEmail,
    UserNotFound,
    WrongPassword,
    InvalidCredential,
    Other(String),
}

impl ProviderErrorCode {
    // Classify a raw provider code. Some codes arrive with a reason
    // suffix ("WEAK_PASSWORD : Password should be at least 6 characters"),
    // so only the leading token is significant.
    pub fn from_provider(raw: &str) -> Self {
        let token = raw.split_whitespace().next().unwrap_or("");
        match token {
            "EMAIL_EXISTS" => ProviderErrorCode::EmailExists,
            "INVALID_EMAIL" => ProviderErrorCode::InvalidEmail,
            "WEAK_PASSWORD" => ProviderErrorCode::WeakPassword,
            "MISSING_PASSWORD" => ProviderErrorCode::MissingPassword,
            "MISSING_EMAIL" => ProviderErrorCode::MissingEmail,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => ProviderErrorCode::UserNotFound,
            "INVALID_PASSWORD" => ProviderErrorCode::WrongPassword,
            "INVALID_LOGIN_CREDENTIALS" => ProviderErrorCode::InvalidCredential,
            _ => ProviderErrorCode::Other(token.to_string()),
        }
    }
}

// Failure surfaced by an identity provider call.
#[derive(Debug)]
pub enum ProviderError {
    // The provider rejected the operation with a classified code.
    Code(ProviderErrorCode),
    Transport(String),
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Code(code) => write!(f, "provider rejected operation: {code:?}"),
            ProviderError::Transport(err) => write!(f, "provider transport error: {err}"),
            ProviderError::Decode(err) => write!(f, "provider response decode error: {err}"),
        }
    }
}

impl std::error::Error for ProviderError {}

// Domain-level errors for gateway workflows.
#[derive(Debug)]
pub enum AuthError {
    // Required fields missing, caught before any provider call.
    MissingCredentials,
    MissingEmail,
    Provider(ProviderError),
}
