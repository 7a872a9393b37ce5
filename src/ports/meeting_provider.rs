//! Meeting provider port for hosted video meetings.
//!
//! The provider owns the meeting resource; this port exposes the three
//! lifecycle calls the booking manager needs. The persisted booking
//! record must never diverge from the last acknowledged provider
//! response, so every mutation here happens *before* the corresponding
//! local write.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::MeetingId;

/// Scheduled consultation length in minutes.
pub const MEETING_DURATION_MINUTES: u32 = 30;

/// Request to create a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMeetingRequest {
    pub topic: String,

    /// Combined local date-time, `"{date}T{HH:MM}:00"`.
    pub start_time: String,

    /// IANA zone name the start time is expressed in.
    pub timezone: String,

    pub duration_minutes: u32,

    /// Attendees wait until the host admits them.
    pub waiting_room: bool,

    /// Whether attendees may join before the host.
    pub join_before_host: bool,
}

impl CreateMeetingRequest {
    /// A consultation meeting with the fixed policy: 30 minutes,
    /// waiting room on, host joins first.
    pub fn consultation(
        topic: impl Into<String>,
        start_time: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            start_time: start_time.into(),
            timezone: timezone.into(),
            duration_minutes: MEETING_DURATION_MINUTES,
            waiting_room: true,
            join_before_host: false,
        }
    }
}

/// Request to move an existing meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMeetingRequest {
    pub start_time: String,
    pub timezone: String,
    pub topic: Option<String>,
}

/// Provider acknowledgment of a created meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: MeetingId,
    pub join_url: String,

    /// Provider-confirmed start instant; callers fall back to the
    /// locally composed start time when absent.
    pub start_time: Option<String>,
}

/// Errors surfaced by the meeting provider.
#[derive(Debug, Clone, Error)]
pub enum MeetingError {
    /// Client credentials are not configured.
    #[error("Missing meeting provider credentials")]
    MissingCredentials,

    /// The OAuth token exchange failed.
    #[error("Meeting provider token error: {0}")]
    Auth(String),

    /// Non-success API response, raw error text attached.
    #[error("Meeting provider error: {0}")]
    Api(String),

    /// 2xx response missing the meeting id or join URL.
    #[error("Meeting provider returned incomplete data: {0}")]
    IncompleteResponse(String),

    /// Transport-level failure.
    #[error("Network error calling meeting provider: {0}")]
    Network(String),

    /// The bounded wait elapsed.
    #[error("Meeting provider request timed out after {0} seconds")]
    Timeout(u64),
}

/// Port for the external meeting host.
#[async_trait]
pub trait MeetingProvider: Send + Sync {
    /// Create a meeting; returns the provider's id, join URL and
    /// confirmed start time.
    async fn create_meeting(&self, request: CreateMeetingRequest) -> Result<Meeting, MeetingError>;

    /// Move an existing meeting to a new start time.
    async fn update_meeting(
        &self,
        meeting_id: &MeetingId,
        update: UpdateMeetingRequest,
    ) -> Result<(), MeetingError>;

    /// Delete an existing meeting.
    async fn delete_meeting(&self, meeting_id: &MeetingId) -> Result<(), MeetingError>;
}
