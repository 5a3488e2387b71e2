use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;

// Gateway credential locations, matching the external contract.
pub const API_KEY_HEADER: &str = "auth_api_key";
pub const API_KEY_QUERY: &str = "AUTH_API_KEY";

// Rejects any request that does not present the configured gateway key
// in the `auth_api_key` header or the `AUTH_API_KEY` query parameter.
// The header wins when both are present.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = header_key(&request).or_else(|| query_key(&request));

    match presented {
        Some(candidate) if candidate == state.gateway_api_key => next.run(request).await,
        _ => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Forbidden: Invalid API key.".to_string(),
            }),
        )
            .into_response(),
    }
}

fn header_key(request: &Request) -> Option<String> {
    request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn query_key(request: &Request) -> Option<String> {
    let query = request.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == API_KEY_QUERY)
        .map(|(_, value)| value.into_owned())
}
