//! Local subscription to credit balance changes.

use crate::domain::foundation::UserId;

/// Observer notified synchronously after every acknowledged balance
/// change (a UI badge, a metric, a test probe).
///
/// Implementations must be cheap and non-blocking; they run inline on
/// the ledger's call path.
pub trait BalanceObserver: Send + Sync {
    /// Called with the post-write balance.
    fn balance_changed(&self, user_id: &UserId, credits: i64);
}
