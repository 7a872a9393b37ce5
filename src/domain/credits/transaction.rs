//! Purchase transaction audit records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TransactionId, UserId};

/// Settlement status of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Checkout session created, payment not yet confirmed.
    Pending,

    /// Payment confirmed and credits granted.
    Completed,
}

/// Audit record of a credit purchase. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,

    /// Charged amount in minor currency units (USD cents).
    pub amount_cents: i64,

    /// Credits granted by this purchase.
    pub credits: i64,

    /// The payment provider's checkout session reference.
    pub checkout_session_id: Option<String>,

    pub status: TransactionStatus,
    pub created_at: Timestamp,
}

impl Transaction {
    /// Records a freshly initiated checkout.
    pub fn pending(
        user_id: UserId,
        amount_cents: i64,
        credits: i64,
        checkout_session_id: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            amount_cents,
            credits,
            checkout_session_id: Some(checkout_session_id.into()),
            status: TransactionStatus::Pending,
            created_at: Timestamp::now(),
        }
    }
}
