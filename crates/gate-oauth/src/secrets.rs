//! # Secret Resolution
//!
//! Port for the secret parameter store.
//!
//! The production store is an external managed service that hands back
//! decrypted parameter values by name. Callers resolve the secret on every
//! invocation; nothing here caches, because the stored value may rotate
//! between requests.

use async_trait::async_trait;
use gate_core::{GateError, GateResult};
use std::collections::HashMap;

/// Port for resolving named secrets to their plaintext values.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    /// Resolve a secret by parameter name.
    ///
    /// Fails with `GateError::SecretNotFound` when the store holds no value
    /// for that name.
    async fn resolve(&self, name: &str) -> GateResult<String>;
}

/// Resolves secrets from process environment variables.
///
/// Stand-in for the managed parameter store in local and single-process
/// deployments; the environment only ever holds plaintext values.
#[derive(Debug, Default, Clone)]
pub struct EnvSecretResolver;

impl EnvSecretResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretResolver for EnvSecretResolver {
    async fn resolve(&self, name: &str) -> GateResult<String> {
        std::env::var(name).map_err(|_| GateError::SecretNotFound {
            name: name.to_string(),
        })
    }
}

/// Fixed-map secret resolver for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemorySecretResolver {
    secrets: HashMap<String, String>,
}

impl InMemorySecretResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a secret under a parameter name
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl SecretResolver for InMemorySecretResolver {
    async fn resolve(&self, name: &str) -> GateResult<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| GateError::SecretNotFound {
                name: name.to_string(),
            })
    }
}
