//! # Payments Repository
//!
//! Storage port for payments, keyed by payment id.
//!
//! The production store is an external key-value service; this crate only
//! defines the port plus an in-memory implementation used by the server
//! default wiring and by tests.

use crate::error::GateResult;
use crate::payment::Payment;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage port for payments.
///
/// `save` overwrites any existing payment with the same id; duplicate-id
/// writes are treated as idempotent retries, not conflicts.
#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    async fn save(&self, payment: Payment) -> GateResult<()>;
    async fn get(&self, id: Uuid) -> GateResult<Option<Payment>>;
    async fn delete(&self, id: Uuid) -> GateResult<()>;
}

/// A thread-safe in-memory payments store.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Payment>>>` to allow shared concurrent
/// access across handler invocations.
#[derive(Default, Clone)]
pub struct InMemoryPaymentsRepository {
    payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl InMemoryPaymentsRepository {
    /// Creates a new, empty in-memory payments store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payments currently stored.
    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    /// Whether the store holds no payments.
    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentsRepository for InMemoryPaymentsRepository {
    async fn save(&self, payment: Payment) -> GateResult<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> GateResult<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> GateResult<()> {
        let mut payments = self.payments.write().await;
        payments.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_payment() -> Payment {
        Payment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount: 10.0,
            currency: "GBP".to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            description: "Payment description".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let store = InMemoryPaymentsRepository::new();
        let payment = a_payment();

        store.save(payment.clone()).await.unwrap();
        let retrieved = store.get(payment.id).await.unwrap().unwrap();

        assert_eq!(retrieved, payment);
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryPaymentsRepository::new();
        let payment = a_payment();

        store.save(payment.clone()).await.unwrap();
        store.delete(payment.id).await.unwrap();

        assert!(store.get(payment.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_overwrites_duplicate_id() {
        let store = InMemoryPaymentsRepository::new();
        let mut payment = a_payment();

        store.save(payment.clone()).await.unwrap();
        payment.description = "updated".to_string();
        store.save(payment.clone()).await.unwrap();

        assert_eq!(store.len().await, 1);
        let retrieved = store.get(payment.id).await.unwrap().unwrap();
        assert_eq!(retrieved.description, "updated");
    }
}
