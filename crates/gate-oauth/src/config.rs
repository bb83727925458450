//! # OAuth Configuration
//!
//! Configuration for the authorization-code callback flow.
//! All values are loaded from environment variables; the client secret itself
//! is never configured here, only the name of the secret-store parameter that
//! holds it.

use gate_core::GateError;
use std::env;

/// Identity provider configuration for the token exchange
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// OAuth client ID registered with the identity provider
    pub client_id: String,

    /// Secret-store parameter name holding the client secret
    pub client_secret_param: String,

    /// Token endpoint URL (POST target for the exchange)
    pub token_url: String,

    /// Redirect URI registered for the authorization-code grant
    pub redirect_uri: String,
}

impl OAuthConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `OAUTH_CLIENT_ID`
    /// - `CLIENT_SECRET_PARAM`
    /// - `OAUTH_TOKEN_URL`
    /// - `CALLBACK_URL`
    pub fn from_env() -> Result<Self, GateError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("OAUTH_CLIENT_ID")
            .map_err(|_| GateError::Configuration("OAUTH_CLIENT_ID not set".to_string()))?;

        let client_secret_param = env::var("CLIENT_SECRET_PARAM")
            .map_err(|_| GateError::Configuration("CLIENT_SECRET_PARAM not set".to_string()))?;

        let token_url = env::var("OAUTH_TOKEN_URL")
            .map_err(|_| GateError::Configuration("OAUTH_TOKEN_URL not set".to_string()))?;

        let redirect_uri = env::var("CALLBACK_URL")
            .map_err(|_| GateError::Configuration("CALLBACK_URL not set".to_string()))?;

        Ok(Self {
            client_id,
            client_secret_param,
            token_url,
            redirect_uri,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        client_id: impl Into<String>,
        client_secret_param: impl Into<String>,
        token_url: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret_param: client_secret_param.into(),
            token_url: token_url.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values() {
        let config = OAuthConfig::new(
            "client-abc",
            "paygate/client-secret",
            "https://idp.example.com/oauth2/token",
            "https://api.example.com/callback",
        );

        assert_eq!(config.client_id, "client-abc");
        assert_eq!(config.client_secret_param, "paygate/client-secret");
    }

    #[test]
    fn test_from_env_missing_client_id() {
        env::remove_var("OAUTH_CLIENT_ID");

        let result = OAuthConfig::from_env();
        assert!(result.is_err());
    }
}
