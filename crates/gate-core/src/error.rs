//! # Gateway Error Types
//!
//! Typed error handling for the paygate gateway.
//! All fallible operations return `Result<T, GateError>`.

use crate::payment::ValidationReport;
use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration errors (missing environment variables, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request payload failed schema validation
    #[error("Invalid payment: {0}")]
    Validation(ValidationReport),

    /// Caller identity does not match the declared payment owner
    #[error("{0}")]
    Unauthorized(String),

    /// Secret store has no value for the requested parameter
    #[error("Failed to retrieve parameter {name} from the secret store")]
    SecretNotFound { name: String },

    /// Identity provider rejected the token exchange
    #[error("Token exchange failed [{status}]: {message}")]
    Exchange { status: u16, message: String },

    /// Network/HTTP error reaching an external collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// Persistence failure in the payment store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GateError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GateError::Configuration(_) => 500,
            GateError::Validation(_) => 400,
            GateError::Unauthorized(_) => 401,
            GateError::SecretNotFound { .. } => 500,
            GateError::Exchange { status, .. } => *status,
            GateError::Network(_) => 500,
            GateError::Storage(_) => 500,
            GateError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GateResult<T> = Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::FieldError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GateError::Configuration("missing CLIENT_ID".into()).status_code(),
            500
        );
        assert_eq!(
            GateError::Unauthorized("not the owner".into()).status_code(),
            401
        );
        assert_eq!(
            GateError::Exchange {
                status: 401,
                message: "invalid_grant".into()
            }
            .status_code(),
            401
        );
        assert_eq!(
            GateError::SecretNotFound {
                name: "client-secret".into()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_validation_status_and_display() {
        let report = ValidationReport::from(vec![FieldError::new("amount", "must be positive")]);
        let err = GateError::Validation(report);

        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_exchange_carries_upstream_status() {
        let err = GateError::Exchange {
            status: 503,
            message: "upstream unavailable".into(),
        };
        assert_eq!(err.status_code(), 503);
        assert!(err.to_string().contains("upstream unavailable"));
    }
}
