//! Stripe checkout-session adapter.
//!
//! Implements the `PaymentProvider` port against Stripe's
//! form-encoded REST API. Only one-time payments with inline
//! `price_data` are needed here; there are no stored products or
//! prices on the Stripe side.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::config::PaymentConfig;
use crate::ports::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentProvider};

/// Payment adapter for the Stripe checkout API.
pub struct StripeCheckoutAdapter {
    api_key: Secret<String>,
    base_url: String,
    timeout_secs: u64,
    client: Client,
}

impl StripeCheckoutAdapter {
    /// Creates an adapter from explicit configuration.
    pub fn new(config: &PaymentConfig) -> Result<Self, PaymentError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        Ok(Self {
            api_key: Secret::new(config.stripe_api_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn sessions_url(&self) -> String {
        format!("{}/v1/checkout/sessions", self.base_url)
    }
}

#[async_trait]
impl PaymentProvider for StripeCheckoutAdapter {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                "usd".to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.line_item.name,
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                request.line_item.description,
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                request.line_item.amount_cents.to_string(),
            ),
            (
                "line_items[0][quantity]".to_string(),
                request.line_item.quantity.to_string(),
            ),
            ("success_url".to_string(), request.success_url),
            ("cancel_url".to_string(), request.cancel_url),
        ];
        if !request.customer_email.is_empty() {
            params.push(("customer_email".to_string(), request.customer_email));
        }
        for (key, value) in request.metadata {
            params.push((format!("metadata[{}]", key), value));
        }

        let response = self
            .client
            .post(self.sessions_url())
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::Timeout(self.timeout_secs)
                } else {
                    PaymentError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "checkout session creation failed");
            return Err(PaymentError::Provider(text));
        }

        let session: StripeSession = response
            .json()
            .await
            .map_err(|e| PaymentError::Provider(format!("unparseable session: {}", e)))?;

        tracing::info!(session_id = %session.id, "checkout session created");
        Ok(CheckoutSession {
            url: session.url.unwrap_or_default(),
            id: session.id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_url_appends_path() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_x".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            base_url: "https://api.stripe.com/".to_string(),
            timeout_secs: 30,
        };
        let adapter = StripeCheckoutAdapter::new(&config).unwrap();
        assert_eq!(
            adapter.sessions_url(),
            "https://api.stripe.com/v1/checkout/sessions"
        );
    }

    #[test]
    fn session_payload_parses_with_and_without_url() {
        let full: StripeSession =
            serde_json::from_str(r#"{"id":"cs_test_1","url":"https://checkout.stripe.com/c/pay/cs_test_1"}"#)
                .unwrap();
        assert_eq!(full.id, "cs_test_1");
        assert!(full.url.is_some());

        let bare: StripeSession = serde_json::from_str(r#"{"id":"cs_test_2"}"#).unwrap();
        assert!(bare.url.is_none());
    }
}
