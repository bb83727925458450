//! # Token Exchange
//!
//! Authorization-code exchange against the identity provider's token
//! endpoint. One form-encoded POST per invocation, authenticated with HTTP
//! Basic credentials built from the client id and the freshly resolved
//! client secret. No retries.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gate_core::{GateError, GateResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default bound on the round trip to the token endpoint
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the exchange needs for a single invocation.
///
/// Borrowed fields keep the secret out of any owned struct that could
/// outlive the request.
#[derive(Debug)]
pub struct ExchangeRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub token_url: &'a str,
}

/// HTTP client for the identity provider token endpoint
#[derive(Debug, Clone)]
pub struct TokenExchangeClient {
    client: Client,
}

impl TokenExchangeClient {
    /// Create a client with an explicit request timeout
    pub fn new(timeout: Duration) -> GateResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GateError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Create a client with the default 10 second timeout
    pub fn with_default_timeout() -> GateResult<Self> {
        Self::new(DEFAULT_TIMEOUT)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// Sends `grant_type=authorization_code` with the client id, code, and
    /// redirect URI as an `application/x-www-form-urlencoded` body, carrying
    /// `Authorization: Basic base64(client_id:client_secret)`.
    ///
    /// Errors carry the upstream status and body text when the provider
    /// rejects the exchange, and status 500 when a 2xx response does not
    /// contain the required `access_token` string field.
    #[instrument(skip(self, request), fields(token_url = %request.token_url))]
    pub async fn exchange(&self, request: &ExchangeRequest<'_>) -> GateResult<String> {
        let basic = BASE64.encode(format!(
            "{}:{}",
            request.client_id, request.client_secret
        ));

        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", request.client_id),
            ("code", request.code),
            ("redirect_uri", request.redirect_uri),
        ];

        debug!("Exchanging authorization code for access token");

        let response = self
            .client
            .post(request.token_url)
            .header("Authorization", format!("Basic {basic}"))
            .form(&form)
            .send()
            .await
            .map_err(|e| GateError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GateError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Token endpoint error: status={}, body={}", status, body);
            return Err(GateError::Exchange {
                status: status.as_u16(),
                message: format!("Failed to get token {body}"),
            });
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Malformed token response: {}", e);
            GateError::Exchange {
                status: 500,
                message: format!("Failed to get token {e}"),
            }
        })?;

        Ok(token.access_token)
    }
}

/// Token endpoint success response.
///
/// Exactly one required string field; anything else in the body is ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}
