//! Resend email adapter.
//!
//! Implements the `Notifier` port against Resend's JSON API. One POST
//! per message; the provider's acceptance is the delivery
//! acknowledgment the port promises.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::ports::{EmailMessage, Notifier, NotifyError};

/// Notification adapter for the Resend API.
pub struct ResendNotifier {
    api_key: Secret<String>,
    base_url: String,
    timeout_secs: u64,
    client: Client,
}

impl ResendNotifier {
    /// Creates a notifier from explicit configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        Ok(Self {
            api_key: Secret::new(config.api_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        let body = SendRequest {
            from: &message.from,
            to: [&message.to],
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout(self.timeout_secs)
                } else {
                    NotifyError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, to = %message.to, "email send failed");
            return Err(NotifyError::Provider(text));
        }

        tracing::debug!(to = %message.to, "email accepted by provider");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}
