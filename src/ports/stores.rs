//! Persistence ports for credit accounts, bookings and transactions.
//!
//! The two mutations with race potential in the reference design are
//! pushed down to the store boundary as atomic operations:
//! `get_or_create` is an upsert (concurrent first accesses yield one
//! record) and `debit_if_available` is a conditional decrement (the
//! balance check and the write are one step). Adapters must honor this;
//! callers never reconstruct check-then-act sequences on top.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::booking::Booking;
use crate::domain::credits::{CreditAccount, Transaction};
use crate::domain::foundation::{BookingId, UserId};

/// Errors surfaced by the persistence layer.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The targeted record does not exist.
    #[error("Record not found")]
    NotFound,

    /// The backing store failed.
    #[error("Persistence error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }
}

/// Port for the per-user credit balance store.
#[async_trait]
pub trait CreditStore: Send + Sync {
    /// Read the account, if it exists.
    async fn find(&self, user_id: &UserId) -> Result<Option<CreditAccount>, StoreError>;

    /// Read the account, creating it with a zero balance if absent.
    ///
    /// Must behave as an upsert: concurrent calls for the same user
    /// produce exactly one record.
    async fn get_or_create(
        &self,
        user_id: &UserId,
        email: Option<&str>,
    ) -> Result<CreditAccount, StoreError>;

    /// Atomically decrement the balance if it covers `amount`.
    ///
    /// Returns `Ok(Some(new_balance))` on success and `Ok(None)` when
    /// the balance is insufficient (including when no account exists);
    /// the balance is left unchanged in the latter case.
    async fn debit_if_available(
        &self,
        user_id: &UserId,
        amount: i64,
    ) -> Result<Option<i64>, StoreError>;

    /// Atomically add to the balance, creating the account if absent.
    /// Returns the new balance.
    async fn add(&self, user_id: &UserId, amount: i64) -> Result<i64, StoreError>;
}

/// Port for persisted booking records.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking.
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError>;

    /// Read a booking by id.
    async fn find(&self, id: &BookingId) -> Result<Option<Booking>, StoreError>;

    /// Overwrite an existing booking; `NotFound` if it was never
    /// inserted.
    async fn update(&self, booking: &Booking) -> Result<(), StoreError>;

    /// All bookings owned by the user.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Booking>, StoreError>;
}

/// Port for purchase transaction audit records.
///
/// Records are append-only; there is no update operation by design.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persist a new transaction record.
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// All transactions owned by the user.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, StoreError>;
}
