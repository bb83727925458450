//! # Request Handlers
//!
//! Axum request handlers for the paygate API.
//!
//! Two independent flows: the OAuth callback (authorization code in, HTML
//! page with the exchanged token out) and payment creation (validated,
//! owner-authorized, persisted). Each invocation is stateless; everything
//! shared lives in `AppState`.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use gate_core::{decode_subject, FieldError, GateError, PaymentRequest};
use gate_oauth::{success_page, ExchangeRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query parameters for the OAuth callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    /// Authorization code from the identity provider redirect
    #[serde(default)]
    pub code: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

fn gate_error_to_response(err: GateError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let response = match err {
        GateError::Validation(report) => ErrorResponse {
            message: format!("Invalid payment: {report}"),
            errors: Some(report.errors),
        },
        other => ErrorResponse::new(other.to_string()),
    };

    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paygate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// OAuth2 authorization-code callback.
///
/// Resolves the client secret, exchanges the code at the token endpoint, and
/// renders the success page with the token embedded. Exactly one secret read
/// and one token POST per invocation; the resolved secret is never cached.
#[instrument(skip(state, params))]
pub async fn oauth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    // Configuration gaps are answered before any network call is attempted.
    let oauth = state.oauth.as_ref().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Missing environment variables")),
        )
    })?;

    let code = params.code.as_deref().filter(|c| !c.is_empty()).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing code query parameter")),
        )
    })?;

    let client_secret = state
        .secrets
        .resolve(&oauth.client_secret_param)
        .await
        .map_err(|e| {
            error!("Secret resolution failed: {}", e);
            gate_error_to_response(e)
        })?;

    let token = state
        .exchanger
        .exchange(&ExchangeRequest {
            client_id: &oauth.client_id,
            client_secret: &client_secret,
            code,
            redirect_uri: &oauth.redirect_uri,
            token_url: &oauth.token_url,
        })
        .await
        .map_err(|e| {
            error!("Token exchange failed: {}", e);
            gate_error_to_response(e)
        })?;

    info!("Token exchange succeeded");

    Ok(Html(success_page(&token)))
}

/// Create a payment.
///
/// The payload is validated first (400 with field errors on failure), then
/// the bearer token's subject must match the payment's declared owner (401
/// otherwise, nothing persisted). A valid, authorized payment is saved once;
/// a repeated id overwrites silently.
#[instrument(skip(state, headers, body))]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let request: PaymentRequest = serde_json::from_str(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("Malformed JSON body: {e}"))),
        )
    })?;

    // The ownership check below compares raw strings, so the wire spelling
    // of the owner id is kept aside before validation consumes the request.
    let owner = request.user_id.clone();

    let payment = request
        .validate()
        .map_err(|report| gate_error_to_response(GateError::Validation(report)))?;

    // Second whitespace-separated token of the Authorization header, or empty.
    // A header without a scheme degrades to an empty token and fails the
    // ownership check below rather than producing a separate error shape.
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split_whitespace().nth(1))
        .unwrap_or("");

    // Raw string equality: a case or spelling variant of the owner's UUID in
    // the token never authorizes, even when both parse to the same value.
    let subject = decode_subject(bearer);

    if subject != owner {
        return Err(gate_error_to_response(GateError::Unauthorized(
            "User is not authorized to perform this operation".to_string(),
        )));
    }

    let payment_id = payment.id;
    state.repository.save(payment).await.map_err(|e| {
        error!("Failed to persist payment {}: {}", payment_id, e);
        gate_error_to_response(e)
    })?;

    info!("Persisted payment {}", payment_id);

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate_core::ValidationReport;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error");
        assert_eq!(err.message, "Test error");
        assert!(err.errors.is_none());
    }

    #[test]
    fn test_validation_error_keeps_field_errors() {
        let report = ValidationReport::from(vec![FieldError::new("amount", "is required")]);
        let (status, Json(response)) = gate_error_to_response(GateError::Validation(report));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.errors.unwrap().len(), 1);
    }

    #[test]
    fn test_exchange_error_status_passthrough() {
        let err = GateError::Exchange {
            status: 401,
            message: "Failed to get token invalid_grant".to_string(),
        };
        let (status, Json(response)) = gate_error_to_response(err);

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(response.message.contains("invalid_grant"));
    }
}
