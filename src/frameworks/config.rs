use std::{env, time::Duration};

// Runtime/server settings sourced from the environment at startup.

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

// Shared secret required on every gateway request.
pub fn gateway_api_key() -> Option<String> {
    env::var("AUTH_API_KEY").ok().filter(|value| !value.is_empty())
}

// Provider project API key forwarded on every provider call.
pub fn firebase_api_key() -> Option<String> {
    env::var("FIREBASE_API_KEY")
        .ok()
        .filter(|value| !value.is_empty())
}

// Provider REST base URL; overridable so tests can point at a local mock.
pub fn firebase_base_url() -> String {
    env::var("FIREBASE_AUTH_URL")
        .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn provider_timeout() -> Duration {
    let millis = env::var("PROVIDER_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}
