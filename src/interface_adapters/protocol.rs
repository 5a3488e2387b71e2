use serde::{Deserialize, Serialize};

// Request payload for registration. Fields default to empty so that
// absence is reported by the provider rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Response payload for registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub firebase_uid: String,
}

// Request payload for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Response payload for login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub firebase_uid: String,
    pub email_verified: bool,
}

// Request payload for the password reset email.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

// Response payload for the password reset email.
#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
}

// Response payload for the gateway greeting route.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

// Error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
