//! CreateBookingHandler - meeting creation, confirmation email,
//! persisted booking record.
//!
//! Step order is load-bearing: the provider call happens before any
//! local write, and the booking is persisted only after both the
//! meeting and the email succeeded. A failure after the meeting was
//! created triggers a best-effort compensating delete so the provider
//! side is not left with an orphaned meeting.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError, FailedStage, Schedule};
use crate::domain::foundation::MeetingId;
use crate::ports::{
    BookingStore, CreateMeetingRequest, EmailMessage, IdentityProvider, MeetingProvider, Notifier,
};

/// Command to book a consultation session.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub notes: Option<String>,

    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// 12-hour wall-clock time, e.g. `"09:00 AM"`.
    pub time: String,

    /// IANA zone name; UTC when absent.
    pub timezone: Option<String>,
}

/// Handler for booking creation.
pub struct CreateBookingHandler {
    identity: Arc<dyn IdentityProvider>,
    meetings: Arc<dyn MeetingProvider>,
    notifier: Arc<dyn Notifier>,
    bookings: Arc<dyn BookingStore>,

    /// Formatted From header for the confirmation email.
    from_email: String,
}

impl CreateBookingHandler {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        meetings: Arc<dyn MeetingProvider>,
        notifier: Arc<dyn Notifier>,
        bookings: Arc<dyn BookingStore>,
        from_email: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            meetings,
            notifier,
            bookings,
            from_email: from_email.into(),
        }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<Booking, BookingError> {
        let user = self
            .identity
            .current_user()
            .await
            .map_err(|_| BookingError::Unauthenticated)?;

        // Fail fast on validation; no external call has happened yet.
        for (field, value) in [
            ("name", &cmd.name),
            ("email", &cmd.email),
            ("topic", &cmd.topic),
            ("time", &cmd.time),
        ] {
            if value.trim().is_empty() {
                return Err(BookingError::missing_field(field));
            }
        }
        let schedule = Schedule::new(cmd.date, cmd.time, cmd.timezone)?;

        let meeting = self
            .meetings
            .create_meeting(CreateMeetingRequest::consultation(
                cmd.topic.clone(),
                schedule.start_time(),
                schedule.timezone(),
            ))
            .await
            .map_err(|e| BookingError::meeting_provider(e.to_string()))?;

        let message = EmailMessage {
            from: self.from_email.clone(),
            to: cmd.email.clone(),
            subject: "Your consultation session is confirmed".to_string(),
            body: [
                "Your consultation session is confirmed.",
                "",
                &format!("Time: {} ({})", schedule.display_time(), schedule.timezone()),
                &format!("Join link: {}", meeting.join_url),
                "",
                "See you soon!",
            ]
            .join("\n"),
        };
        if let Err(err) = self.notifier.send(message).await {
            let released = self.release_meeting(&meeting.id).await;
            return Err(BookingError::partial_failure(
                FailedStage::Notification,
                err.to_string(),
                released,
            ));
        }

        let start_time = meeting
            .start_time
            .unwrap_or_else(|| schedule.start_time());
        let booking = Booking::confirmed(
            user.id,
            cmd.name,
            cmd.email,
            cmd.topic,
            cmd.notes,
            &schedule,
            meeting.id.clone(),
            meeting.join_url,
            start_time,
        );
        if let Err(err) = self.bookings.insert(&booking).await {
            let released = self.release_meeting(&meeting.id).await;
            return Err(BookingError::partial_failure(
                FailedStage::Persistence,
                err.to_string(),
                released,
            ));
        }

        tracing::info!(booking_id = %booking.id, meeting_id = %booking.meeting_id, "booking confirmed");
        Ok(booking)
    }

    /// Compensating delete after a post-creation failure. Returns
    /// whether the provider-side meeting was actually released.
    async fn release_meeting(&self, meeting_id: &MeetingId) -> bool {
        match self.meetings.delete_meeting(meeting_id).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    %meeting_id,
                    error = %err,
                    "compensating meeting delete failed; manual cleanup required"
                );
                false
            }
        }
    }
}
