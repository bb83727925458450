//! # gate-core
//!
//! Core types and ports for the paygate payment gateway.
//!
//! This crate provides:
//! - `Payment` and `PaymentRequest` for the payment domain
//! - `ValidationReport` for structured request validation errors
//! - `decode_subject` for extracting the caller identity from a bearer token
//! - `PaymentsRepository` port and an in-memory implementation
//! - `GateError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gate_core::{decode_subject, InMemoryPaymentsRepository, PaymentRequest, PaymentsRepository};
//!
//! // Validate an incoming payment payload
//! let request: PaymentRequest = serde_json::from_str(body)?;
//! let payment = request.validate()?;
//!
//! // Authorize against the bearer token's subject (raw string equality)
//! let subject = decode_subject(token);
//! if subject.as_deref() != Some(owner_id) {
//!     return reject();
//! }
//!
//! // Persist
//! repository.save(payment).await?;
//! ```

pub mod claims;
pub mod error;
pub mod payment;
pub mod repository;

// Re-exports for convenience
pub use claims::decode_subject;
pub use error::{GateError, GateResult};
pub use payment::{FieldError, Payment, PaymentRequest, ValidationReport};
pub use repository::{InMemoryPaymentsRepository, PaymentsRepository};
