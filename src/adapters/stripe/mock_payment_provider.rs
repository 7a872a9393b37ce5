//! Mock payment provider for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentProvider};

/// `PaymentProvider` double that mints deterministic sessions and
/// records every request for verification.
#[derive(Debug, Clone)]
pub struct MockPaymentProvider {
    requests: Arc<Mutex<Vec<CheckoutSessionRequest>>>,
    next_session: Arc<Mutex<u64>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl Default for MockPaymentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            next_session: Arc::new(Mutex::new(1)),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Fails every session creation with the given provider error text.
    pub fn failing(message: impl Into<String>) -> Self {
        let provider = Self::new();
        *provider.fail_with.lock().unwrap() = Some(message.into());
        provider
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<CheckoutSessionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.requests.lock().unwrap().push(request);
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(PaymentError::Provider(message));
        }

        let n = {
            let mut next = self.next_session.lock().unwrap();
            let n = *next;
            *next += 1;
            n
        };
        let id = format!("cs_test_{:08}", n);
        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.example.com/c/pay/{}", id),
            id,
        })
    }
}
