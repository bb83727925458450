//! # gate-oauth
//!
//! OAuth2 authorization-code exchange collaborators for paygate-rs.
//!
//! This crate provides:
//!
//! 1. **TokenExchangeClient** - exchanges an authorization code for an access
//!    token at the identity provider's token endpoint (Basic credentials,
//!    form-encoded body, single attempt).
//!
//! 2. **SecretResolver** - port for the secret parameter store; the client
//!    secret is resolved by name at call time and never cached.
//!
//! 3. **OAuthConfig** - environment-driven configuration for the callback
//!    flow.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gate_oauth::{ExchangeRequest, OAuthConfig, SecretResolver, TokenExchangeClient};
//!
//! let config = OAuthConfig::from_env()?;
//! let secret = resolver.resolve(&config.client_secret_param).await?;
//!
//! let token = client
//!     .exchange(&ExchangeRequest {
//!         client_id: &config.client_id,
//!         client_secret: &secret,
//!         code: auth_code,
//!         redirect_uri: &config.redirect_uri,
//!         token_url: &config.token_url,
//!     })
//!     .await?;
//! ```

pub mod config;
pub mod exchange;
pub mod page;
pub mod secrets;

// Re-exports
pub use config::OAuthConfig;
pub use exchange::{ExchangeRequest, TokenExchangeClient};
pub use page::success_page;
pub use secrets::{EnvSecretResolver, InMemorySecretResolver, SecretResolver};
