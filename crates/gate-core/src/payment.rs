//! # Payment Types
//!
//! Payment domain type and request validation for paygate.
//!
//! Incoming payloads deserialize leniently into `PaymentRequest` and are then
//! checked field by field, so a caller gets one structured report listing
//! everything wrong with the payload instead of failing on the first field.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A validated payment, ready to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment ID (supplied by the caller)
    pub id: Uuid,

    /// Owning user. Must match the authenticated subject for a create to succeed.
    pub user_id: Uuid,

    /// Payment amount, strictly positive
    pub amount: f64,

    /// ISO currency code, non-empty
    pub currency: String,

    /// Creation time in epoch milliseconds, strictly positive
    pub timestamp: i64,

    /// Free-form description
    pub description: String,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,
    /// What the field failed to satisfy
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The full set of validation failures for one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<FieldError>> for ValidationReport {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

/// An unvalidated payment payload as received on the wire.
///
/// Every field is optional so a partially-formed body still deserializes;
/// `validate` turns it into a `Payment` or a complete `ValidationReport`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub timestamp: Option<i64>,
    pub description: Option<String>,
}

impl PaymentRequest {
    /// Validate the payload against the payment schema.
    ///
    /// Checks, per field:
    /// - `id`, `userId`: present and syntactically valid UUIDs
    /// - `amount`: present, finite, strictly positive
    /// - `currency`: present and non-empty
    /// - `timestamp`: present and strictly positive (epoch millis)
    /// - `description`: present (may be empty)
    pub fn validate(self) -> Result<Payment, ValidationReport> {
        let mut errors = Vec::new();

        let id = validate_uuid("id", self.id.as_deref(), &mut errors);
        let user_id = validate_uuid("userId", self.user_id.as_deref(), &mut errors);

        let amount = match self.amount {
            Some(a) if a.is_finite() && a > 0.0 => Some(a),
            Some(_) => {
                errors.push(FieldError::new("amount", "must be a positive number"));
                None
            }
            None => {
                errors.push(FieldError::new("amount", "is required"));
                None
            }
        };

        let currency = match self.currency {
            Some(c) if !c.is_empty() => Some(c),
            Some(_) => {
                errors.push(FieldError::new("currency", "must not be empty"));
                None
            }
            None => {
                errors.push(FieldError::new("currency", "is required"));
                None
            }
        };

        let timestamp = match self.timestamp {
            Some(t) if t > 0 => Some(t),
            Some(_) => {
                errors.push(FieldError::new("timestamp", "must be a positive number"));
                None
            }
            None => {
                errors.push(FieldError::new("timestamp", "is required"));
                None
            }
        };

        let description = match self.description {
            Some(d) => Some(d),
            None => {
                errors.push(FieldError::new("description", "is required"));
                None
            }
        };

        match (id, user_id, amount, currency, timestamp, description) {
            (Some(id), Some(user_id), Some(amount), Some(currency), Some(timestamp), Some(description))
                if errors.is_empty() =>
            {
                Ok(Payment {
                    id,
                    user_id,
                    amount,
                    currency,
                    timestamp,
                    description,
                })
            }
            _ => Err(ValidationReport::from(errors)),
        }
    }
}

fn validate_uuid(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<Uuid> {
    match value {
        // Hyphenated form only, matching the shape the claims decoder accepts.
        Some(raw) if crate::claims::is_uuid_shaped(raw) => Uuid::parse_str(raw).ok(),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a valid UUID"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_request() -> PaymentRequest {
        PaymentRequest {
            id: Some(Uuid::new_v4().to_string()),
            user_id: Some(Uuid::new_v4().to_string()),
            amount: Some(10.0),
            currency: Some("GBP".to_string()),
            timestamp: Some(1_700_000_000_000),
            description: Some("Payment description".to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        let payment = a_request().validate().unwrap();

        assert_eq!(payment.amount, 10.0);
        assert_eq!(payment.currency, "GBP");
    }

    #[test]
    fn test_empty_description_is_valid() {
        let mut request = a_request();
        request.description = Some(String::new());

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let report = PaymentRequest::default().validate().unwrap_err();

        assert_eq!(report.errors.len(), 6);
        assert!(report.errors.iter().all(|e| e.message == "is required"));
    }

    #[test]
    fn test_non_uuid_ids_rejected() {
        let mut request = a_request();
        request.id = Some("not-a-uuid".to_string());
        request.user_id = Some("also-not".to_string());

        let report = request.validate().unwrap_err();
        let fields: Vec<_> = report.errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["id", "userId"]);
    }

    #[test]
    fn test_non_hyphenated_uuid_forms_rejected() {
        let mut request = a_request();
        request.id = Some(Uuid::new_v4().simple().to_string());
        request.user_id = Some(format!("{{{}}}", Uuid::new_v4()));

        let report = request.validate().unwrap_err();
        let fields: Vec<_> = report.errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["id", "userId"]);
    }

    #[test]
    fn test_uppercase_hyphenated_uuid_accepted() {
        let mut request = a_request();
        request.user_id = Some(Uuid::new_v4().to_string().to_uppercase());

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut request = a_request();
        request.amount = Some(-5.0);

        let report = request.validate().unwrap_err();
        assert_eq!(report.errors[0].field, "amount");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut request = a_request();
        request.amount = Some(0.0);

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_currency_rejected() {
        let mut request = a_request();
        request.currency = Some(String::new());

        let report = request.validate().unwrap_err();
        assert_eq!(report.errors[0].field, "currency");
        assert_eq!(report.errors[0].message, "must not be empty");
    }

    #[test]
    fn test_non_positive_timestamp_rejected() {
        let mut request = a_request();
        request.timestamp = Some(0);

        let report = request.validate().unwrap_err();
        assert_eq!(report.errors[0].field, "timestamp");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let payment: PaymentRequest = serde_json::from_value(serde_json::json!({
            "id": "9f2c7410-33cb-4ebc-9a06-6bb34ffc5b88",
            "userId": "3b6f1f62-5c7d-4a4e-a6dd-6803e0a5bb70",
            "amount": 12.5,
            "currency": "USD",
            "timestamp": 1_700_000_000_000_i64,
            "description": ""
        }))
        .unwrap();

        assert!(payment.validate().is_ok());
    }

    #[test]
    fn test_report_display() {
        let report = ValidationReport::from(vec![
            FieldError::new("amount", "must be a positive number"),
            FieldError::new("currency", "must not be empty"),
        ]);

        assert_eq!(
            report.to_string(),
            "amount: must be a positive number; currency: must not be empty"
        );
    }
}
