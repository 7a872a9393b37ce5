//! Notification port for transactional email.

use async_trait::async_trait;
use thiserror::Error;

/// A plain-text transactional email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Errors surfaced by the notification provider.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// Non-success response from the provider, raw error text attached.
    #[error("Notification provider error: {0}")]
    Provider(String),

    /// Transport-level failure.
    #[error("Network error calling notification provider: {0}")]
    Network(String),

    /// The bounded wait elapsed.
    #[error("Notification request timed out after {0} seconds")]
    Timeout(u64),
}

/// Port for sending transactional email.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one email; resolves once the provider acknowledges
    /// delivery acceptance.
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError>;
}
