//! Fixed-principal identity adapter.
//!
//! Used in tests and in runtimes where the surrounding platform has
//! already authenticated the request and the principal is simply
//! handed to the core per operation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// `IdentityProvider` that always resolves to one configured principal,
/// or always fails when built with [`StaticIdentityProvider::unauthenticated`].
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    user: Option<AuthenticatedUser>,
}

impl StaticIdentityProvider {
    /// Always resolves to the given principal.
    pub fn new(user_id: UserId, email: Option<String>) -> Self {
        Self {
            user: Some(AuthenticatedUser::new(user_id, email)),
        }
    }

    /// Always fails with `Unauthenticated`.
    pub fn unauthenticated() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> Result<AuthenticatedUser, AuthError> {
        self.user.clone().ok_or(AuthError::Unauthenticated)
    }
}
