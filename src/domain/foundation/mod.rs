//! Foundation - shared value objects for the domain layer.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::ValidationError;
pub use ids::{BookingId, MeetingId, TransactionId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
