//! # Application State
//!
//! Shared state for the Axum application.
//! All collaborators (payment store, secret resolver, token exchange client)
//! are injected here once per process; handlers hold no hidden globals.

use gate_core::{InMemoryPaymentsRepository, PaymentsRepository};
use gate_oauth::{EnvSecretResolver, OAuthConfig, SecretResolver, TokenExchangeClient};
use std::sync::Arc;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Identity provider configuration; `None` leaves the callback route
    /// answering 500 without touching the network
    pub oauth: Option<OAuthConfig>,
    /// Token exchange HTTP client
    pub exchanger: TokenExchangeClient,
    /// Payment store
    pub repository: Arc<dyn PaymentsRepository>,
    /// Secret parameter store
    pub secrets: Arc<dyn SecretResolver>,
}

impl AppState {
    /// Create state with explicit collaborators
    pub fn new(
        config: AppConfig,
        oauth: Option<OAuthConfig>,
        exchanger: TokenExchangeClient,
        repository: Arc<dyn PaymentsRepository>,
        secrets: Arc<dyn SecretResolver>,
    ) -> Self {
        Self {
            config,
            oauth,
            exchanger,
            repository,
            secrets,
        }
    }

    /// Create state from environment with default collaborators:
    /// in-memory payment store and environment-backed secret resolver.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let oauth = match OAuthConfig::from_env() {
            Ok(oauth) => Some(oauth),
            Err(e) => {
                warn!("OAuth configuration incomplete, /callback will answer 500: {e}");
                None
            }
        };

        let exchanger = TokenExchangeClient::with_default_timeout()
            .map_err(|e| anyhow::anyhow!("Failed to initialize token exchange client: {e}"))?;

        Ok(Self::new(
            config,
            oauth,
            exchanger,
            Arc::new(InMemoryPaymentsRepository::new()),
            Arc::new(EnvSecretResolver::new()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment_is_not_production() {
        // Built explicitly; from_env reads the process environment and
        // mutating it here would race sibling tests.
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
        };

        assert!(!config.is_production());
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
