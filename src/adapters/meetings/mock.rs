//! Scripted meeting provider for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::MeetingId;
use crate::ports::{
    CreateMeetingRequest, Meeting, MeetingError, MeetingProvider, UpdateMeetingRequest,
};

/// One recorded provider interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingCall {
    Create(CreateMeetingRequest),
    Update(MeetingId, UpdateMeetingRequest),
    Delete(MeetingId),
}

/// `MeetingProvider` double that hands out deterministic meetings and
/// records every interaction for verification.
#[derive(Debug, Clone)]
pub struct MockMeetingProvider {
    calls: Arc<Mutex<Vec<MeetingCall>>>,
    next_meeting_id: Arc<Mutex<u64>>,
    /// Provider-confirmed start time override; `None` simulates a
    /// provider that omits the field.
    confirmed_start_time: Arc<Mutex<Option<String>>>,
    fail_create: Arc<Mutex<Option<String>>>,
    fail_update: Arc<Mutex<Option<String>>>,
    fail_delete: Arc<Mutex<Option<String>>>,
}

impl Default for MockMeetingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMeetingProvider {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_meeting_id: Arc::new(Mutex::new(88000001)),
            confirmed_start_time: Arc::new(Mutex::new(None)),
            fail_create: Arc::new(Mutex::new(None)),
            fail_update: Arc::new(Mutex::new(None)),
            fail_delete: Arc::new(Mutex::new(None)),
        }
    }

    /// Makes the provider echo back the given confirmed start time on
    /// create (instead of omitting it).
    pub fn with_confirmed_start_time(self, start_time: impl Into<String>) -> Self {
        *self.confirmed_start_time.lock().unwrap() = Some(start_time.into());
        self
    }

    /// Fails every create with the given provider error text.
    pub fn failing_create(self, message: impl Into<String>) -> Self {
        *self.fail_create.lock().unwrap() = Some(message.into());
        self
    }

    /// Fails every update with the given provider error text.
    pub fn failing_update(self, message: impl Into<String>) -> Self {
        *self.fail_update.lock().unwrap() = Some(message.into());
        self
    }

    /// Fails every delete with the given provider error text.
    pub fn failing_delete(self, message: impl Into<String>) -> Self {
        *self.fail_delete.lock().unwrap() = Some(message.into());
        self
    }

    /// Interactions so far, in order.
    pub fn calls(&self) -> Vec<MeetingCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of delete calls seen.
    pub fn delete_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, MeetingCall::Delete(_)))
            .count()
    }
}

#[async_trait]
impl MeetingProvider for MockMeetingProvider {
    async fn create_meeting(&self, request: CreateMeetingRequest) -> Result<Meeting, MeetingError> {
        self.calls
            .lock()
            .unwrap()
            .push(MeetingCall::Create(request.clone()));
        if let Some(message) = self.fail_create.lock().unwrap().clone() {
            return Err(MeetingError::Api(message));
        }

        let id = {
            let mut next = self.next_meeting_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let meeting_id = MeetingId::new(id.to_string()).expect("non-empty id");
        Ok(Meeting {
            join_url: format!("https://zoom.example.com/j/{}", meeting_id),
            id: meeting_id,
            start_time: self.confirmed_start_time.lock().unwrap().clone(),
        })
    }

    async fn update_meeting(
        &self,
        meeting_id: &MeetingId,
        update: UpdateMeetingRequest,
    ) -> Result<(), MeetingError> {
        self.calls
            .lock()
            .unwrap()
            .push(MeetingCall::Update(meeting_id.clone(), update));
        if let Some(message) = self.fail_update.lock().unwrap().clone() {
            return Err(MeetingError::Api(message));
        }
        Ok(())
    }

    async fn delete_meeting(&self, meeting_id: &MeetingId) -> Result<(), MeetingError> {
        self.calls
            .lock()
            .unwrap()
            .push(MeetingCall::Delete(meeting_id.clone()));
        if let Some(message) = self.fail_delete.lock().unwrap().clone() {
            return Err(MeetingError::Api(message));
        }
        Ok(())
    }
}
