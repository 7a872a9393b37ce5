//! Payment provider port for hosted checkout sessions.
//!
//! The provider renders and hosts the checkout page; this port only
//! creates the session and hands back the redirect URL. Settlement
//! confirmation is an out-of-band concern that enters the crate through
//! `CreditLedger::credit`.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// The single line item of a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    /// Product display name, e.g. `"25 Credits"`.
    pub name: String,

    /// Product description shown under the name.
    pub description: String,

    /// Price in minor currency units (USD cents).
    pub amount_cents: i64,

    pub quantity: u32,
}

/// Request to create a one-time-payment checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    pub line_item: CheckoutLineItem,

    /// Pre-filled customer email; may be empty.
    pub customer_email: String,

    /// Redirect after successful payment.
    pub success_url: String,

    /// Redirect after abandoning checkout.
    pub cancel_url: String,

    /// Opaque key/value pairs echoed back on settlement; carries the
    /// user id and purchased credit count.
    pub metadata: HashMap<String, String>,
}

/// A created checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Provider session identifier.
    pub id: String,

    /// Hosted checkout page URL to redirect the user to.
    pub url: String,
}

/// Errors surfaced by the payment provider.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// Non-success response from the provider, raw error text attached.
    #[error("Payment provider error: {0}")]
    Provider(String),

    /// Transport-level failure.
    #[error("Network error calling payment provider: {0}")]
    Network(String),

    /// The bounded wait elapsed.
    #[error("Payment request timed out after {0} seconds")]
    Timeout(u64),
}

/// Port for the external payment processor.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session for a priced product.
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}
