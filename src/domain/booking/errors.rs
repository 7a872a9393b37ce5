//! Booking-specific error types.

use thiserror::Error;

use crate::domain::foundation::BookingId;

/// Stage of booking creation that failed after the meeting had already
/// been created on the provider side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStage {
    Notification,
    Persistence,
}

impl std::fmt::Display for FailedStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailedStage::Notification => write!(f, "confirmation email"),
            FailedStage::Persistence => write!(f, "booking persistence"),
        }
    }
}

/// Errors surfaced by the booking lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum BookingError {
    /// A required booking field was empty.
    #[error("Missing required booking field: {field}")]
    MissingField { field: String },

    /// The supplied time is not a valid `H:MM AM|PM` string.
    #[error("Invalid time format: '{input}'")]
    InvalidTimeFormat { input: String },

    /// The booking does not exist (or belongs to another user).
    #[error("Booking not found: {0}")]
    NotFound(BookingId),

    /// The booking is canceled; no further changes are permitted.
    #[error("Booking {0} is already canceled")]
    AlreadyCanceled(BookingId),

    /// The meeting provider rejected the call; carries the provider's
    /// error text.
    #[error("Meeting provider error: {message}")]
    MeetingProvider { message: String },

    /// The confirmation email could not be sent.
    #[error("Notification error: {message}")]
    Notification { message: String },

    /// The meeting was created remotely but a later stage failed; the
    /// meeting has been compensated with a best-effort delete.
    /// `meeting_released` is false when that delete also failed and the
    /// provider-side resource needs manual cleanup.
    #[error("Booking failed at {stage} after meeting creation: {message}")]
    PartialFailure {
        stage: FailedStage,
        message: String,
        meeting_released: bool,
    },

    /// The backing store failed.
    #[error("Booking store error: {0}")]
    Store(String),

    /// No authenticated principal for this operation.
    #[error("User not authenticated")]
    Unauthenticated,
}

impl BookingError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        BookingError::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_time(input: impl Into<String>) -> Self {
        BookingError::InvalidTimeFormat {
            input: input.into(),
        }
    }

    pub fn meeting_provider(message: impl Into<String>) -> Self {
        BookingError::MeetingProvider {
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        BookingError::Notification {
            message: message.into(),
        }
    }

    pub fn partial_failure(
        stage: FailedStage,
        message: impl Into<String>,
        meeting_released: bool,
    ) -> Self {
        BookingError::PartialFailure {
            stage,
            message: message.into(),
            meeting_released,
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        BookingError::Store(message.into())
    }
}
