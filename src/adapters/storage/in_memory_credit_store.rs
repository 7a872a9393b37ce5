//! In-memory credit account store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::credits::CreditAccount;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{CreditStore, StoreError};

/// Mutex-guarded `CreditStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCreditStore {
    accounts: Arc<Mutex<HashMap<UserId, CreditAccount>>>,
}

impl InMemoryCreditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an account with a starting balance (test setup).
    pub fn with_balance(self, user_id: UserId, credits: i64) -> Self {
        {
            let mut accounts = self.accounts.lock().unwrap();
            let mut account = CreditAccount::new(user_id.clone(), None);
            account.credits = credits;
            accounts.insert(user_id, account);
        }
        self
    }

    /// Number of stored accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl CreditStore for InMemoryCreditStore {
    async fn find(&self, user_id: &UserId) -> Result<Option<CreditAccount>, StoreError> {
        Ok(self.accounts.lock().unwrap().get(user_id).cloned())
    }

    async fn get_or_create(
        &self,
        user_id: &UserId,
        email: Option<&str>,
    ) -> Result<CreditAccount, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .entry(user_id.clone())
            .or_insert_with(|| CreditAccount::new(user_id.clone(), email.map(str::to_string)));
        Ok(account.clone())
    }

    async fn debit_if_available(
        &self,
        user_id: &UserId,
        amount: i64,
    ) -> Result<Option<i64>, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.get_mut(user_id) {
            Some(account) if account.credits >= amount => {
                account.credits -= amount;
                account.updated_at = Timestamp::now();
                Ok(Some(account.credits))
            }
            _ => Ok(None),
        }
    }

    async fn add(&self, user_id: &UserId, amount: i64) -> Result<i64, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .entry(user_id.clone())
            .or_insert_with(|| CreditAccount::new(user_id.clone(), None));
        account.credits += amount;
        account.updated_at = Timestamp::now();
        Ok(account.credits)
    }
}
