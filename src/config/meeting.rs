//! Meeting provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Meeting provider configuration (Zoom server-to-server OAuth app)
///
/// Credentials are held here explicitly and injected at adapter
/// construction; nothing reads the process environment at call time.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingConfig {
    /// OAuth account id
    pub account_id: String,

    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl MeetingConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether all three credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.account_id.is_empty()
            && !self.client_id.is_empty()
            && !self.client_secret.is_empty()
    }

    /// Validate meeting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.account_id.is_empty() {
            return Err(ValidationError::MissingRequired("MEETING__ACCOUNT_ID"));
        }
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("MEETING__CLIENT_ID"));
        }
        if self.client_secret.is_empty() {
            return Err(ValidationError::MissingRequired("MEETING__CLIENT_SECRET"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.zoom.us/v2".to_string()
}

fn default_token_url() -> String {
    "https://zoom.us/oauth/token".to_string()
}

fn default_timeout() -> u64 {
    30
}
