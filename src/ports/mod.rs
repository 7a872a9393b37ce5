//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! Every external collaborator of the application has exactly one port:
//!
//! - `IdentityProvider` - the authenticated principal
//! - `RecipeModel` - AI text generation
//! - `MeetingProvider` - hosted video meetings (create/update/delete)
//! - `Notifier` - transactional email
//! - `PaymentProvider` - hosted checkout sessions
//! - `CreditStore` / `BookingStore` / `TransactionStore` - persistence
//! - `BalanceObserver` - local subscription to balance changes

mod ai_provider;
mod auth_provider;
mod balance_observer;
mod meeting_provider;
mod notifier;
mod payment_provider;
mod stores;

pub use ai_provider::{GenerationRequest, ModelError, RecipeModel};
pub use auth_provider::IdentityProvider;
pub use balance_observer::BalanceObserver;
pub use meeting_provider::{
    CreateMeetingRequest, Meeting, MeetingError, MeetingProvider, UpdateMeetingRequest,
};
pub use notifier::{EmailMessage, Notifier, NotifyError};
pub use payment_provider::{
    CheckoutLineItem, CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentProvider,
};
pub use stores::{BookingStore, CreditStore, StoreError, TransactionStore};
