//! Credit ledger service.
//!
//! Thin orchestration over the `CreditStore` port: the store owns the
//! atomicity of get-or-create and conditional decrement; the ledger
//! adds the observer notifications and the error mapping.

use std::sync::Arc;

use crate::domain::credits::CreditError;
use crate::domain::foundation::UserId;
use crate::ports::{BalanceObserver, CreditStore};

/// Per-user credit balance operations.
pub struct CreditLedger {
    store: Arc<dyn CreditStore>,
    observers: Vec<Arc<dyn BalanceObserver>>,
}

impl CreditLedger {
    pub fn new(store: Arc<dyn CreditStore>) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every acknowledged balance
    /// change.
    pub fn with_observer(mut self, observer: Arc<dyn BalanceObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn notify(&self, user_id: &UserId, credits: i64) {
        for observer in &self.observers {
            observer.balance_changed(user_id, credits);
        }
    }

    /// Current balance, creating the account with zero credits on
    /// first access. `email` is denormalized onto a freshly created
    /// account when known.
    pub async fn balance(
        &self,
        user_id: &UserId,
        email: Option<&str>,
    ) -> Result<i64, CreditError> {
        let account = self
            .store
            .get_or_create(user_id, email)
            .await
            .map_err(|e| CreditError::store(e.to_string()))?;
        Ok(account.credits)
    }

    /// Debits `amount` credits atomically; the balance is untouched on
    /// failure.
    pub async fn debit(&self, user_id: &UserId, amount: i64) -> Result<i64, CreditError> {
        let outcome = self
            .store
            .debit_if_available(user_id, amount)
            .await
            .map_err(|e| CreditError::store(e.to_string()))?;

        match outcome {
            Some(remaining) => {
                tracing::debug!(%user_id, remaining, "credits debited");
                self.notify(user_id, remaining);
                Ok(remaining)
            }
            None => {
                let available = self
                    .store
                    .find(user_id)
                    .await
                    .map_err(|e| CreditError::store(e.to_string()))?
                    .map(|a| a.credits)
                    .unwrap_or(0);
                Err(CreditError::insufficient(available, amount))
            }
        }
    }

    /// Adds `amount` credits, creating the account if absent. Entry
    /// point for payment settlement and admin tooling.
    pub async fn credit(&self, user_id: &UserId, amount: i64) -> Result<i64, CreditError> {
        let balance = self
            .store
            .add(user_id, amount)
            .await
            .map_err(|e| CreditError::store(e.to_string()))?;
        tracing::debug!(%user_id, balance, granted = amount, "credits granted");
        self.notify(user_id, balance);
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCreditStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ProbeObserver {
        seen: Mutex<Vec<(String, i64)>>,
    }

    impl BalanceObserver for ProbeObserver {
        fn balance_changed(&self, user_id: &UserId, credits: i64) {
            self.seen
                .lock()
                .unwrap()
                .push((user_id.to_string(), credits));
        }
    }

    fn user() -> UserId {
        UserId::new("u-1").unwrap()
    }

    fn ledger_with(store: InMemoryCreditStore) -> CreditLedger {
        CreditLedger::new(Arc::new(store))
    }

    #[tokio::test]
    async fn first_access_creates_zero_balance() {
        let store = InMemoryCreditStore::new();
        let ledger = ledger_with(store.clone());

        assert_eq!(ledger.balance(&user(), Some("a@b.c")).await.unwrap(), 0);
        assert_eq!(store.account_count(), 1);

        // Second read reuses the record.
        assert_eq!(ledger.balance(&user(), None).await.unwrap(), 0);
        assert_eq!(store.account_count(), 1);
    }

    #[tokio::test]
    async fn debit_decrements_and_persists() {
        let ledger = ledger_with(InMemoryCreditStore::new().with_balance(user(), 3));
        assert_eq!(ledger.debit(&user(), 1).await.unwrap(), 2);
        assert_eq!(ledger.balance(&user(), None).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn debit_beyond_balance_fails_and_preserves_it() {
        let ledger = ledger_with(InMemoryCreditStore::new().with_balance(user(), 1));
        let err = ledger.debit(&user(), 2).await.unwrap_err();
        assert_eq!(
            err,
            CreditError::InsufficientCredit {
                available: 1,
                requested: 2
            }
        );
        assert_eq!(ledger.balance(&user(), None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn credit_creates_account_and_adds() {
        let ledger = ledger_with(InMemoryCreditStore::new());
        assert_eq!(ledger.credit(&user(), 25).await.unwrap(), 25);
        assert_eq!(ledger.credit(&user(), 10).await.unwrap(), 35);
    }

    #[tokio::test]
    async fn observers_see_each_acknowledged_change() {
        let probe = Arc::new(ProbeObserver::default());
        let ledger = ledger_with(InMemoryCreditStore::new().with_balance(user(), 2))
            .with_observer(probe.clone());

        ledger.credit(&user(), 3).await.unwrap();
        ledger.debit(&user(), 1).await.unwrap();
        // Failed debit must not notify.
        let _ = ledger.debit(&user(), 100).await;

        let seen = probe.seen.lock().unwrap().clone();
        assert_eq!(seen, vec![("u-1".to_string(), 5), ("u-1".to_string(), 4)]);
    }
}
