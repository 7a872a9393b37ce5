//! Payment configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key
    pub stripe_api_key: String,

    /// Frontend origin the checkout redirects back to
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    /// Stripe API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Redirect target after successful payment. The provider expands
    /// the session id placeholder itself.
    pub fn success_url(&self) -> String {
        format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.frontend_url
        )
    }

    /// Redirect target after abandoning checkout.
    pub fn cancel_url(&self) -> String {
        format!("{}/pricing", self.frontend_url)
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_API_KEY"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if self.frontend_url.is_empty() || !self.frontend_url.starts_with("http") {
            return Err(ValidationError::InvalidFrontendUrl);
        }
        Ok(())
    }
}

fn default_frontend_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_base_url() -> String {
    "https://api.stripe.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> PaymentConfig {
        PaymentConfig {
            stripe_api_key: "sk_test_xxx".to_string(),
            frontend_url: default_frontend_url(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn valid_config_passes() {
        let config = base_config();
        assert!(config.validate().is_ok());
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn redirect_urls_derive_from_frontend() {
        let config = base_config();
        assert_eq!(
            config.success_url(),
            "http://localhost:5173/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(config.cancel_url(), "http://localhost:5173/pricing");
    }

    #[test]
    fn wrong_key_prefix_fails() {
        let config = PaymentConfig {
            stripe_api_key: "pk_test_xxx".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_key_fails() {
        let config = PaymentConfig {
            stripe_api_key: String::new(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }
}
