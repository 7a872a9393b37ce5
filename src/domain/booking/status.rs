//! Booking status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a booking.
///
/// `Canceled` is terminal: no further reschedule or cancel is permitted
/// once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Meeting created and confirmation sent.
    Confirmed,

    /// Moved to a new date/time at least once.
    Rescheduled,

    /// Meeting deleted on the provider side. Terminal.
    Canceled,
}

impl BookingStatus {
    /// Whether the booking can still be changed.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Canceled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Rescheduled => "rescheduled",
            BookingStatus::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for BookingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            (Confirmed, Rescheduled)
                | (Confirmed, Canceled)
                | (Rescheduled, Rescheduled)
                | (Rescheduled, Canceled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Confirmed => vec![Rescheduled, Canceled],
            Rescheduled => vec![Rescheduled, Canceled],
            Canceled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_can_reschedule_and_cancel() {
        assert!(BookingStatus::Confirmed.can_transition_to(&BookingStatus::Rescheduled));
        assert!(BookingStatus::Confirmed.can_transition_to(&BookingStatus::Canceled));
    }

    #[test]
    fn rescheduled_can_reschedule_again() {
        assert!(BookingStatus::Rescheduled.can_transition_to(&BookingStatus::Rescheduled));
    }

    #[test]
    fn canceled_is_terminal() {
        assert!(BookingStatus::Canceled.is_terminal());
        assert!(!BookingStatus::Canceled.can_transition_to(&BookingStatus::Rescheduled));
        assert!(!BookingStatus::Canceled.can_transition_to(&BookingStatus::Canceled));
    }

    #[test]
    fn nothing_returns_to_confirmed() {
        assert!(!BookingStatus::Rescheduled.can_transition_to(&BookingStatus::Confirmed));
        assert!(!BookingStatus::Canceled.can_transition_to(&BookingStatus::Confirmed));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Rescheduled).unwrap(),
            "\"rescheduled\""
        );
    }
}
