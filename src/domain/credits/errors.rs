//! Credit ledger error types.

use thiserror::Error;

/// Errors surfaced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditError {
    /// The balance cannot fund the requested debit. The balance is left
    /// unchanged.
    #[error("Insufficient credits: {available} available, {requested} requested")]
    InsufficientCredit { available: i64, requested: i64 },

    /// The backing store failed.
    #[error("Credit store error: {0}")]
    Store(String),
}

impl CreditError {
    pub fn insufficient(available: i64, requested: i64) -> Self {
        CreditError::InsufficientCredit {
            available,
            requested,
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        CreditError::Store(message.into())
    }
}
