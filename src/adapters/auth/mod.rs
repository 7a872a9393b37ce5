//! Identity adapters.

mod static_identity;

pub use static_identity::StaticIdentityProvider;
