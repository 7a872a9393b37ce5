//! Identity provider port.
//!
//! The application never inspects tokens itself; the surrounding
//! runtime (or a test double) resolves the current principal.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves the authenticated principal for the current operation.
///
/// # Contract
///
/// Implementations must:
/// - Return the principal with its stable user id and optional email claim
/// - Return `AuthError::Unauthenticated` when no principal is available
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated user.
    async fn current_user(&self) -> Result<AuthenticatedUser, AuthError>;
}
