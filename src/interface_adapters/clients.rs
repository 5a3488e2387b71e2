use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AuthResult, NewAccount};
use crate::domain::errors::{ProviderError, ProviderErrorCode};
use crate::domain::ports::IdentityProvider;

// The clients defined here are reqwest clients for the external identity
// provider's REST surface (Identity Toolkit v1).
// Thin wrapper around reqwest; every call is attempted at most once.
#[derive(Clone)]
pub struct FirebaseAuthClient {
    http: Client,
    api_key: String,
    base_url: String,
}

// Credentials payload shared by signUp and signInWithPassword.
#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct SignUpResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
}

#[derive(Deserialize)]
struct SignInResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
}

// Out-of-band email request: VERIFY_EMAIL carries the id token,
// PASSWORD_RESET carries the address.
#[derive(Serialize)]
struct OobRequest<'a> {
    #[serde(rename = "requestType")]
    request_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(rename = "idToken", skip_serializing_if = "Option::is_none")]
    id_token: Option<&'a str>,
}

#[derive(Serialize)]
struct TokenPayload<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
struct LookupUser {
    #[serde(rename = "emailVerified", default)]
    email_verified: bool,
}

// Error envelope the provider wraps every non-2xx response in.
#[derive(Deserialize)]
struct RestErrorEnvelope {
    error: RestErrorBody,
}

#[derive(Deserialize)]
struct RestErrorBody {
    message: String,
}

impl FirebaseAuthClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key)
    }

    // POST one provider action and decode the response, translating
    // non-2xx error envelopes into classified provider codes.
    async fn call<B, R>(&self, action: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let res = self
            .http
            .post(self.endpoint(action))
            .json(body)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        let status = res.status();

        if !status.is_success() {
            return match res.json::<RestErrorEnvelope>().await {
                Ok(envelope) => Err(ProviderError::Code(ProviderErrorCode::from_provider(
                    &envelope.error.message,
                ))),
                Err(_) => Err(ProviderError::Decode(format!(
                    "provider returned {status} without an error code"
                ))),
            };
        }

        res.json::<R>()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<NewAccount, ProviderError> {
        let res: SignUpResponse = self
            .call(
                "signUp",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(NewAccount {
            uid: res.local_id,
            id_token: res.id_token,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ProviderError> {
        let res: SignInResponse = self
            .call(
                "signInWithPassword",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        // The verified flag only comes back from a profile lookup.
        let lookup: LookupResponse = self
            .call("lookup", &TokenPayload {
                id_token: &res.id_token,
            })
            .await?;
        let email_verified = lookup
            .users
            .first()
            .map(|user| user.email_verified)
            .unwrap_or(false);

        Ok(AuthResult {
            uid: res.local_id,
            email_verified,
        })
    }

    async fn send_verification_email(&self, id_token: &str) -> Result<(), ProviderError> {
        let _: serde_json::Value = self
            .call(
                "sendOobCode",
                &OobRequest {
                    request_type: "VERIFY_EMAIL",
                    email: None,
                    id_token: Some(id_token),
                },
            )
            .await?;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        let _: serde_json::Value = self
            .call(
                "sendOobCode",
                &OobRequest {
                    request_type: "PASSWORD_RESET",
                    email: Some(email),
                    id_token: None,
                },
            )
            .await?;
        Ok(())
    }

    async fn delete_account(&self, id_token: &str) -> Result<(), ProviderError> {
        let _: serde_json::Value = self
            .call("delete", &TokenPayload { id_token })
            .await?;
        Ok(())
    }
}
