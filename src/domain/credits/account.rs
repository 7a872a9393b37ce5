//! Credit account - one record per user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Per-user credit balance.
///
/// Created lazily on first access with a zero balance and never deleted.
/// The balance itself is only mutated through the store's atomic
/// operations; this type is the read model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditAccount {
    /// Owning user.
    pub user_id: UserId,

    /// Remaining credits. Never negative.
    pub credits: i64,

    /// Email denormalized from the identity claims, when known.
    pub email: Option<String>,

    /// Last balance change (or creation time).
    pub updated_at: Timestamp,
}

impl CreditAccount {
    /// Creates a fresh account with a zero balance.
    pub fn new(user_id: UserId, email: Option<String>) -> Self {
        Self {
            user_id,
            credits: 0,
            email,
            updated_at: Timestamp::now(),
        }
    }

    /// Whether the account can fund at least one generation.
    pub fn has_credit(&self) -> bool {
        self.credits > 0
    }
}
