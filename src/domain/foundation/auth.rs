//! Authentication types for the domain layer.
//!
//! These types represent the authenticated principal as seen by the
//! application. They have **no provider dependencies** - any identity
//! provider (Cognito, Zitadel, Auth0) can populate them via the
//! `IdentityProvider` port.

use super::UserId;
use thiserror::Error;

/// The authenticated principal for the current operation.
///
/// `email` is the optional email claim; absent when the provider does
/// not expose one for this user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The stable user identifier from the identity provider.
    pub id: UserId,

    /// Email claim, if present.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }

    /// Returns the email claim or an empty string.
    ///
    /// The checkout flow forwards this to the payment provider, which
    /// accepts an empty customer email.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Errors surfaced by identity lookups.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No authenticated principal is available for this operation.
    #[error("User not authenticated")]
    Unauthenticated,

    /// The identity provider could not be reached.
    #[error("Identity provider unavailable: {0}")]
    ServiceUnavailable(String),
}
