//! # gate-api
//!
//! HTTP API layer for paygate-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - OAuth2 authorization-code callback endpoint
//! - Bearer-token-gated payment creation endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/callback` | Exchange an authorization code for a token |
//! | POST | `/payments` | Create a payment (owner-authorized) |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
