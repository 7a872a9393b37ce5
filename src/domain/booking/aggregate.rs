//! Booking aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, MeetingId, StateMachine, Timestamp, UserId};

use super::{BookingError, BookingStatus, Schedule};

/// A scheduled consultation session backed by an externally hosted
/// video meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub topic: String,
    pub notes: Option<String>,

    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// 12-hour wall-clock time, e.g. `"02:00 PM"`.
    pub time: String,

    /// IANA zone name as supplied by the caller; UTC when absent.
    pub timezone: Option<String>,

    /// Provider meeting id. Immutable once set.
    pub meeting_id: MeetingId,

    /// Join link returned by the provider.
    pub meeting_url: String,

    /// Provider-confirmed start instant (local composition as fallback).
    pub start_time: String,

    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl Booking {
    /// Builds a confirmed booking from a validated slot and a
    /// successful meeting-creation round trip.
    #[allow(clippy::too_many_arguments)]
    pub fn confirmed(
        user_id: UserId,
        name: String,
        email: String,
        topic: String,
        notes: Option<String>,
        schedule: &Schedule,
        meeting_id: MeetingId,
        meeting_url: String,
        start_time: String,
    ) -> Self {
        Self {
            id: BookingId::new(),
            user_id,
            name,
            email,
            topic,
            notes,
            date: schedule.date().to_string(),
            time: schedule.time().to_string(),
            timezone: schedule.timezone_raw().map(str::to_string),
            meeting_id,
            meeting_url,
            start_time,
            status: BookingStatus::Confirmed,
            created_at: Timestamp::now(),
        }
    }

    /// Applies a reschedule: new slot, provider-confirmed start time.
    ///
    /// The meeting id is untouched. Fails once the booking is canceled.
    pub fn reschedule(
        &mut self,
        schedule: &Schedule,
        start_time: String,
    ) -> Result<(), BookingError> {
        self.status = self
            .status
            .transition_to(BookingStatus::Rescheduled)
            .map_err(|_| BookingError::AlreadyCanceled(self.id))?;
        self.date = schedule.date().to_string();
        self.time = schedule.time().to_string();
        if let Some(tz) = schedule.timezone_raw() {
            self.timezone = Some(tz.to_string());
        }
        self.start_time = start_time;
        Ok(())
    }

    /// Marks the booking canceled. Fails if already canceled; callers
    /// wanting idempotent cancel check `is_canceled` first.
    pub fn cancel(&mut self) -> Result<(), BookingError> {
        self.status = self
            .status
            .transition_to(BookingStatus::Canceled)
            .map_err(|_| BookingError::AlreadyCanceled(self.id))?;
        Ok(())
    }

    /// Whether the terminal state has been reached.
    pub fn is_canceled(&self) -> bool {
        self.status == BookingStatus::Canceled
    }
}
