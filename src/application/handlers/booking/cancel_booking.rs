//! CancelBookingHandler - delete the provider meeting and mark the
//! record canceled.
//!
//! Cancel is idempotent: a booking already in the terminal state is
//! returned as-is without touching the provider, so repeated cancels
//! cannot fail against an already-deleted meeting.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::BookingId;
use crate::ports::{BookingStore, IdentityProvider, MeetingProvider, StoreError};

/// Command to cancel a booking.
#[derive(Debug, Clone)]
pub struct CancelBookingCommand {
    pub booking_id: BookingId,
}

/// Handler for booking cancellation.
pub struct CancelBookingHandler {
    identity: Arc<dyn IdentityProvider>,
    meetings: Arc<dyn MeetingProvider>,
    bookings: Arc<dyn BookingStore>,
}

impl CancelBookingHandler {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        meetings: Arc<dyn MeetingProvider>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            identity,
            meetings,
            bookings,
        }
    }

    pub async fn handle(&self, cmd: CancelBookingCommand) -> Result<Booking, BookingError> {
        let user = self
            .identity
            .current_user()
            .await
            .map_err(|_| BookingError::Unauthenticated)?;

        let mut booking = self
            .bookings
            .find(&cmd.booking_id)
            .await
            .map_err(|e| BookingError::store(e.to_string()))?
            .filter(|b| b.user_id == user.id)
            .ok_or(BookingError::NotFound(cmd.booking_id))?;

        if booking.is_canceled() {
            tracing::debug!(booking_id = %booking.id, "cancel on canceled booking is a no-op");
            return Ok(booking);
        }

        self.meetings
            .delete_meeting(&booking.meeting_id)
            .await
            .map_err(|e| BookingError::meeting_provider(e.to_string()))?;

        booking.cancel()?;
        self.bookings.update(&booking).await.map_err(|e| match e {
            StoreError::NotFound => BookingError::NotFound(booking.id),
            other => BookingError::store(other.to_string()),
        })?;

        tracing::info!(booking_id = %booking.id, meeting_id = %booking.meeting_id, "booking canceled");
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::StaticIdentityProvider;
    use crate::adapters::meetings::{MeetingCall, MockMeetingProvider};
    use crate::adapters::storage::InMemoryBookingStore;
    use crate::domain::booking::{BookingStatus, Schedule};
    use crate::domain::foundation::{MeetingId, UserId};

    fn seeded_booking() -> Booking {
        let schedule = Schedule::new("2025-01-10", "09:00 AM", None).unwrap();
        Booking::confirmed(
            UserId::new("u-1").unwrap(),
            "Alice".into(),
            "alice@example.com".into(),
            "Recipe Consultation".into(),
            None,
            &schedule,
            MeetingId::new("9923456789").unwrap(),
            "https://meet.example.com/j/9923456789".into(),
            "2025-01-10T09:00:00".into(),
        )
    }

    fn handler(
        meetings: MockMeetingProvider,
        bookings: InMemoryBookingStore,
    ) -> CancelBookingHandler {
        CancelBookingHandler::new(
            Arc::new(StaticIdentityProvider::new(
                UserId::new("u-1").unwrap(),
                None,
            )),
            Arc::new(meetings),
            Arc::new(bookings),
        )
    }

    #[tokio::test]
    async fn cancel_deletes_meeting_and_marks_terminal() {
        let meetings = MockMeetingProvider::new();
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking();
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings.clone(), bookings.clone());
        let canceled = h
            .handle(CancelBookingCommand {
                booking_id: seeded.id,
            })
            .await
            .unwrap();

        assert_eq!(canceled.status, BookingStatus::Canceled);
        assert!(matches!(
            meetings.calls()[0],
            MeetingCall::Delete(ref id) if *id == seeded.meeting_id
        ));
        let stored = bookings.find(&seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Canceled);
    }

    #[tokio::test]
    async fn repeated_cancel_is_idempotent_and_skips_provider() {
        let meetings = MockMeetingProvider::new();
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking();
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings.clone(), bookings);
        let cmd = CancelBookingCommand {
            booking_id: seeded.id,
        };
        for _ in 0..3 {
            let result = h.handle(cmd.clone()).await.unwrap();
            assert_eq!(result.status, BookingStatus::Canceled);
        }
        // Only the first call reached the provider.
        assert_eq!(meetings.delete_count(), 1);
    }

    #[tokio::test]
    async fn provider_failure_keeps_booking_active() {
        let meetings = MockMeetingProvider::new().failing_delete("meeting not found");
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking();
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings, bookings.clone());
        let err = h
            .handle(CancelBookingCommand {
                booking_id: seeded.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::MeetingProvider { .. }));

        let stored = bookings.find(&seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let h = handler(MockMeetingProvider::new(), InMemoryBookingStore::new());
        assert!(matches!(
            h.handle(CancelBookingCommand {
                booking_id: BookingId::new()
            })
            .await,
            Err(BookingError::NotFound(_))
        ));
    }
}
