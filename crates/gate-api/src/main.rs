//! # Paygate RS
//!
//! OAuth-gated payment gateway.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export OAUTH_CLIENT_ID=client-abc
//! export CLIENT_SECRET_PARAM=paygate/client-secret
//! export OAUTH_TOKEN_URL=https://idp.example.com/oauth2/token
//! export CALLBACK_URL=https://api.example.com/callback
//!
//! # Run the server
//! paygate
//! ```

use gate_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::from_env()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("OAuth configured: {}", state.oauth.is_some());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Paygate {} starting on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Callback: GET  http://{}/callback?code=...", addr);
        info!("Payments: POST http://{}/payments", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
