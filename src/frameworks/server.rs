use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

use crate::frameworks::config;
use crate::interface_adapters::clients::FirebaseAuthClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let gateway_api_key = match config::gateway_api_key() {
        Some(value) => value,
        None => {
            tracing::error!("AUTH_API_KEY must be set");
            return;
        }
    };

    let firebase_api_key = match config::firebase_api_key() {
        Some(value) => value,
        None => {
            tracing::error!("FIREBASE_API_KEY must be set");
            return;
        }
    };

    let base_url = config::firebase_base_url();
    if let Err(error) = Url::parse(&base_url) {
        tracing::error!(%base_url, %error, "invalid FIREBASE_AUTH_URL");
        return;
    }

    // Provider client is constructed once here and injected into every
    // handler through the application state.
    let provider = match FirebaseAuthClient::new(
        base_url.as_str(),
        firebase_api_key.as_str(),
        config::provider_timeout(),
    ) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            tracing::error!(%error, "failed to build provider client");
            return;
        }
    };
    tracing::debug!(provider_base_url = %base_url, "identity provider client configured.");

    let state = AppState {
        provider,
        gateway_api_key,
    };

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server error");
    }
}
