use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, warn};

use crate::domain::errors::{AuthError, ProviderError, ProviderErrorCode};
use crate::interface_adapters::protocol::{
    ErrorResponse, ForgotPasswordRequest, ForgotPasswordResponse, GreetingResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::forgot_password::ForgotPasswordUseCase;
use crate::use_cases::login::LoginUseCase;
use crate::use_cases::register::RegisterUseCase;

// Handler for creating a provider account and dispatching the
// verification email.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = RegisterUseCase {
        provider: state.provider.clone(),
    };

    let result = use_case
        .execute(&payload.email, &payload.password)
        .await
        .map_err(|err| {
            warn!(error = ?err, "registration failed");
            map_auth_error(err)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully. Verification email sent.".to_string(),
            firebase_uid: result.uid,
        }),
    ))
}

// Handler for signing in against the provider.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = LoginUseCase {
        provider: state.provider.clone(),
    };

    let result = use_case
        .execute(&payload.email, &payload.password)
        .await
        .map_err(|err| {
            warn!(error = ?err, "login failed");
            map_auth_error(err)
        })?;

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        firebase_uid: result.uid,
        email_verified: result.email_verified,
    }))
}

// Handler for dispatching the password reset email.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<ForgotPasswordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ForgotPasswordUseCase {
        provider: state.provider.clone(),
    };

    use_case.execute(&payload.email).await.map_err(|err| {
        warn!(error = ?err, "password reset dispatch failed");
        map_auth_error(err)
    })?;

    Ok(Json(ForgotPasswordResponse {
        message: "Password reset email sent.".to_string(),
    }))
}

// Handler for the gateway greeting route.
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Auth gateway is running.".to_string(),
    })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, error: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses.
fn map_auth_error(err: AuthError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        AuthError::MissingCredentials => {
            error_response(StatusCode::BAD_REQUEST, "Email and password are required.")
        }
        AuthError::MissingEmail => error_response(StatusCode::BAD_REQUEST, "Email is required."),
        AuthError::Provider(provider_err) => map_provider_error(provider_err),
    }
}

// Fixed lookup from provider error codes to the external HTTP contract.
fn map_provider_error(err: ProviderError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ProviderError::Code(code) => match code {
            ProviderErrorCode::EmailExists => {
                error_response(StatusCode::CONFLICT, "Email already in use.")
            }
            ProviderErrorCode::InvalidEmail => {
                error_response(StatusCode::BAD_REQUEST, "Invalid email address.")
            }
            ProviderErrorCode::WeakPassword => {
                error_response(StatusCode::BAD_REQUEST, "Password is too weak.")
            }
            ProviderErrorCode::MissingPassword => {
                error_response(StatusCode::BAD_REQUEST, "Password is required.")
            }
            ProviderErrorCode::MissingEmail => {
                error_response(StatusCode::BAD_REQUEST, "Email is required.")
            }
            ProviderErrorCode::UserNotFound => {
                error_response(StatusCode::NOT_FOUND, "User not found.")
            }
            ProviderErrorCode::WrongPassword => {
                error_response(StatusCode::UNAUTHORIZED, "Incorrect password.")
            }
            ProviderErrorCode::InvalidCredential => {
                error_response(StatusCode::BAD_REQUEST, "Invalid credentials.")
            }
            ProviderErrorCode::Other(code) => {
                error!(provider_code = %code, "unclassified provider error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        },
        ProviderError::Transport(detail) => {
            error!(detail = %detail, "provider transport failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
        }
        ProviderError::Decode(detail) => {
            error!(detail = %detail, "provider response decode failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
        }
    }
}
