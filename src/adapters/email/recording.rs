//! Recording notifier for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{EmailMessage, Notifier, NotifyError};

/// `Notifier` that records every message instead of sending it, with
/// optional failure injection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Arc<Mutex<Option<NotifyError>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail with the given error.
    pub fn failing(error: NotifyError) -> Self {
        let notifier = Self::new();
        *notifier.fail_with.lock().unwrap() = Some(error);
        notifier
    }

    /// Messages accepted so far.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of accepted messages.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> EmailMessage {
        EmailMessage {
            from: "Recipe AI <noreply@recipe-ai.example>".to_string(),
            to: "alice@example.com".to_string(),
            subject: "Your consultation is confirmed".to_string(),
            body: "Join link: https://meet.example.com/j/1".to_string(),
        }
    }

    #[tokio::test]
    async fn records_accepted_messages() {
        let notifier = RecordingNotifier::new();
        notifier.send(message()).await.unwrap();
        assert_eq!(notifier.sent_count(), 1);
        assert_eq!(notifier.sent()[0].to, "alice@example.com");
    }

    #[tokio::test]
    async fn failure_injection_rejects_and_records_nothing() {
        let notifier =
            RecordingNotifier::failing(NotifyError::Provider("quota exceeded".to_string()));
        assert!(notifier.send(message()).await.is_err());
        assert_eq!(notifier.sent_count(), 0);
    }
}
