//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `RECIPE_AI` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use recipe_ai::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod email;
mod error;
mod meeting;
mod payment;

pub use ai::AiConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use meeting::MeetingConfig;
pub use payment::PaymentConfig;

use serde::Deserialize;

/// Root application configuration
///
/// One section per external collaborator. Load using
/// [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// AI model provider configuration
    pub ai: AiConfig,

    /// Meeting provider configuration (Zoom OAuth app)
    pub meeting: MeetingConfig,

    /// Email configuration
    pub email: EmailConfig,

    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `RECIPE_AI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RECIPE_AI__MEETING__CLIENT_ID=...` -> `meeting.client_id = ...`
    /// - `RECIPE_AI__PAYMENT__STRIPE_API_KEY=...` -> `payment.stripe_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RECIPE_AI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.meeting.validate()?;
        self.email.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("RECIPE_AI__AI__API_KEY", "bearer-token");
        env::set_var("RECIPE_AI__MEETING__ACCOUNT_ID", "acct-1");
        env::set_var("RECIPE_AI__MEETING__CLIENT_ID", "client-1");
        env::set_var("RECIPE_AI__MEETING__CLIENT_SECRET", "secret-1");
        env::set_var("RECIPE_AI__EMAIL__API_KEY", "re_xxx");
        env::set_var("RECIPE_AI__EMAIL__FROM_EMAIL", "noreply@recipe-ai.example");
        env::set_var("RECIPE_AI__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
    }

    fn clear_env() {
        env::remove_var("RECIPE_AI__AI__API_KEY");
        env::remove_var("RECIPE_AI__MEETING__ACCOUNT_ID");
        env::remove_var("RECIPE_AI__MEETING__CLIENT_ID");
        env::remove_var("RECIPE_AI__MEETING__CLIENT_SECRET");
        env::remove_var("RECIPE_AI__EMAIL__API_KEY");
        env::remove_var("RECIPE_AI__EMAIL__FROM_EMAIL");
        env::remove_var("RECIPE_AI__PAYMENT__STRIPE_API_KEY");
    }

    #[test]
    fn loads_and_validates_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();

        let config = AppConfig::load().expect("load should succeed");
        config.validate().expect("validate should succeed");
        assert_eq!(config.meeting.account_id, "acct-1");
        assert_eq!(config.email.from_email, "noreply@recipe-ai.example");

        clear_env();
    }

    #[test]
    fn load_fails_without_required_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        assert!(AppConfig::load().is_err());
    }
}
