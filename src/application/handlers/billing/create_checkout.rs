//! CreateCheckoutHandler - map a credit package to a hosted checkout
//! session.
//!
//! The session metadata carries the user id and the purchased credit
//! count so the out-of-band settlement step can later credit the
//! ledger; settlement itself enters the crate through
//! `CreditLedger::credit`.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::credits::{CreditPackage, Transaction};
use crate::ports::{
    CheckoutLineItem, CheckoutSession, CheckoutSessionRequest, IdentityProvider, PaymentProvider,
    TransactionStore,
};

/// Command to start a credit purchase.
#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    /// Requested package size; must match the catalog exactly.
    pub credits: i64,
}

/// Errors surfaced by the checkout flow.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Invalid credit package: {credits}")]
    InvalidPackage { credits: i64 },

    #[error("Checkout failed: {0}")]
    Payment(String),

    #[error("Transaction store error: {0}")]
    Store(String),
}

/// Handler for checkout session creation.
pub struct CreateCheckoutHandler {
    identity: Arc<dyn IdentityProvider>,
    payments: Arc<dyn PaymentProvider>,
    transactions: Arc<dyn TransactionStore>,

    /// Redirect after successful payment (session id placeholder
    /// expanded by the provider).
    success_url: String,

    /// Redirect after abandoning checkout.
    cancel_url: String,
}

impl CreateCheckoutHandler {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        payments: Arc<dyn PaymentProvider>,
        transactions: Arc<dyn TransactionStore>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            payments,
            transactions,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCheckoutCommand,
    ) -> Result<CheckoutSession, CheckoutError> {
        let user = self
            .identity
            .current_user()
            .await
            .map_err(|_| CheckoutError::Unauthenticated)?;

        // Unknown package counts never reach the provider.
        let package = CreditPackage::for_credits(cmd.credits).ok_or(
            CheckoutError::InvalidPackage {
                credits: cmd.credits,
            },
        )?;

        let mut metadata = HashMap::new();
        metadata.insert("userId".to_string(), user.id.to_string());
        metadata.insert("credits".to_string(), package.credits.to_string());

        let session = self
            .payments
            .create_checkout_session(CheckoutSessionRequest {
                line_item: CheckoutLineItem {
                    name: package.display_name(),
                    description: package.description(),
                    amount_cents: package.amount_cents,
                    quantity: 1,
                },
                customer_email: user.email_or_empty().to_string(),
                success_url: self.success_url.clone(),
                cancel_url: self.cancel_url.clone(),
                metadata,
            })
            .await
            .map_err(|e| CheckoutError::Payment(e.to_string()))?;

        let transaction = Transaction::pending(
            user.id,
            package.amount_cents,
            package.credits,
            session.id.clone(),
        );
        self.transactions
            .insert(&transaction)
            .await
            .map_err(|e| CheckoutError::Store(e.to_string()))?;

        tracing::info!(
            session_id = %session.id,
            credits = package.credits,
            "checkout session created"
        );
        Ok(session)
    }
}
