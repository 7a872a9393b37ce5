//! RescheduleBookingHandler - move a booking to a new slot.
//!
//! The provider update always targets the booking's original meeting
//! id. No new confirmation email is sent on reschedule.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError, Schedule};
use crate::domain::foundation::BookingId;
use crate::ports::{BookingStore, IdentityProvider, MeetingProvider, StoreError, UpdateMeetingRequest};

/// Command to reschedule an existing booking.
#[derive(Debug, Clone)]
pub struct RescheduleBookingCommand {
    pub booking_id: BookingId,
    pub date: String,
    pub time: String,
    pub timezone: Option<String>,
}

/// Handler for booking reschedule.
pub struct RescheduleBookingHandler {
    identity: Arc<dyn IdentityProvider>,
    meetings: Arc<dyn MeetingProvider>,
    bookings: Arc<dyn BookingStore>,
}

impl RescheduleBookingHandler {
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

    pub async fn handle(&self, cmd: RescheduleBookingCommand) -> Result<Booking, BookingError> {
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
            return Err(BookingError::AlreadyCanceled(booking.id));
        }

        let schedule = Schedule::new(cmd.date, cmd.time, cmd.timezone)?;

        self.meetings
            .update_meeting(
                &booking.meeting_id,
                UpdateMeetingRequest {
                    start_time: schedule.start_time(),
                    timezone: schedule.timezone().to_string(),
                    topic: Some(booking.topic.clone()),
                },
            )
            .await
            .map_err(|e| BookingError::meeting_provider(e.to_string()))?;

        booking.reschedule(&schedule, schedule.start_time())?;
        self.bookings.update(&booking).await.map_err(|e| match e {
            StoreError::NotFound => BookingError::NotFound(booking.id),
            other => BookingError::store(other.to_string()),
        })?;

        tracing::info!(
            booking_id = %booking.id,
            start_time = %booking.start_time,
            "booking rescheduled"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::StaticIdentityProvider;
    use crate::adapters::meetings::{MeetingCall, MockMeetingProvider};
    use crate::adapters::storage::InMemoryBookingStore;
    use crate::domain::booking::BookingStatus;
    use crate::domain::foundation::{MeetingId, UserId};

    fn seeded_booking(user: &str) -> Booking {
        let schedule = Schedule::new("2025-01-10", "09:00 AM", None).unwrap();
        Booking::confirmed(
            UserId::new(user).unwrap(),
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
    ) -> RescheduleBookingHandler {
        RescheduleBookingHandler::new(
            Arc::new(StaticIdentityProvider::new(
                UserId::new("u-1").unwrap(),
                None,
            )),
            Arc::new(meetings),
            Arc::new(bookings),
        )
    }

    fn command(id: BookingId) -> RescheduleBookingCommand {
        RescheduleBookingCommand {
            booking_id: id,
            date: "2025-02-01".to_string(),
            time: "02:00 PM".to_string(),
            timezone: Some("Europe/Berlin".to_string()),
        }
    }

    #[tokio::test]
    async fn reschedule_updates_slot_status_and_provider() {
        let meetings = MockMeetingProvider::new();
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking("u-1");
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings.clone(), bookings.clone());
        let updated = h.handle(command(seeded.id)).await.unwrap();

        assert_eq!(updated.status, BookingStatus::Rescheduled);
        assert_eq!(updated.date, "2025-02-01");
        assert_eq!(updated.time, "02:00 PM");
        assert_eq!(updated.start_time, "2025-02-01T14:00:00");
        assert_eq!(updated.meeting_id, seeded.meeting_id);

        match &meetings.calls()[0] {
            MeetingCall::Update(id, req) => {
                assert_eq!(*id, seeded.meeting_id);
                assert_eq!(req.start_time, "2025-02-01T14:00:00");
                assert_eq!(req.timezone, "Europe/Berlin");
            }
            other => panic!("unexpected call: {:?}", other),
        }

        // The store holds the same updated record.
        let stored = bookings.find(&seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Rescheduled);
        assert_eq!(stored.start_time, "2025-02-01T14:00:00");
    }

    #[tokio::test]
    async fn canceled_booking_cannot_be_rescheduled() {
        let meetings = MockMeetingProvider::new();
        let bookings = InMemoryBookingStore::new();
        let mut seeded = seeded_booking("u-1");
        seeded.cancel().unwrap();
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings.clone(), bookings);
        let err = h.handle(command(seeded.id)).await.unwrap_err();
        assert!(matches!(err, BookingError::AlreadyCanceled(_)));
        assert!(meetings.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_time_rejected_before_provider_call() {
        let meetings = MockMeetingProvider::new();
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking("u-1");
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings.clone(), bookings);
        let mut cmd = command(seeded.id);
        cmd.time = "2:3 PM".to_string();
        assert!(matches!(
            h.handle(cmd).await,
            Err(BookingError::InvalidTimeFormat { .. })
        ));
        assert!(meetings.calls().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_leaves_record_unchanged() {
        let meetings = MockMeetingProvider::new().failing_update("meeting locked");
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking("u-1");
        bookings.insert(&seeded).await.unwrap();

        let h = handler(meetings, bookings.clone());
        let err = h.handle(command(seeded.id)).await.unwrap_err();
        assert!(matches!(err, BookingError::MeetingProvider { .. }));

        let stored = bookings.find(&seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Confirmed);
        assert_eq!(stored.date, "2025-01-10");
    }

    #[tokio::test]
    async fn other_users_booking_reads_as_not_found() {
        let bookings = InMemoryBookingStore::new();
        let seeded = seeded_booking("u-2");
        bookings.insert(&seeded).await.unwrap();

        let h = handler(MockMeetingProvider::new(), bookings);
        assert!(matches!(
            h.handle(command(seeded.id)).await,
            Err(BookingError::NotFound(_))
        ));
    }
}
