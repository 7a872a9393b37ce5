//! In-memory transaction store.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::credits::Transaction;
use crate::domain::foundation::UserId;
use crate::ports::{StoreError, TransactionStore};

/// Append-only, mutex-guarded `TransactionStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect())
    }
}
