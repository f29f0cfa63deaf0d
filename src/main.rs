//! minibank application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Create the in-memory session store and ledger
//! 3. Build router with API routes + static file serving
//! 4. Start Axum server

use minibank::{auth::middleware::AppState, config::Config, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides; info otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config");
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "Starting minibank");

    let bind_addr = config.bind_addr;
    let app = routes::app(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %bind_addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
