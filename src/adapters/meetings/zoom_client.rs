//! Zoom meeting adapter.
//!
//! Implements the `MeetingProvider` port against Zoom's REST API using
//! a server-to-server OAuth app: each call exchanges the account
//! credentials for a bearer token (Basic auth on the token endpoint),
//! then issues the meeting call. Tokens are not cached; the exchange is
//! cheap relative to the meeting call and a fresh token sidesteps
//! expiry tracking.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::MeetingConfig;
use crate::domain::foundation::MeetingId;
use crate::ports::{
    CreateMeetingRequest, Meeting, MeetingError, MeetingProvider, UpdateMeetingRequest,
};

/// Zoom meeting type for a scheduled (non-recurring) meeting.
const MEETING_TYPE_SCHEDULED: u8 = 2;

/// Meeting provider adapter for the Zoom API.
pub struct ZoomMeetingProvider {
    account_id: String,
    client_id: String,
    client_secret: Secret<String>,
    base_url: String,
    token_url: String,
    timeout_secs: u64,
    client: Client,
}

impl ZoomMeetingProvider {
    /// Creates a provider from explicit configuration.
    ///
    /// Fails fast with `MissingCredentials` rather than at the first
    /// call if any of the three credentials is empty.
    pub fn new(config: &MeetingConfig) -> Result<Self, MeetingError> {
        if !config.has_credentials() {
            return Err(MeetingError::MissingCredentials);
        }
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| MeetingError::Network(e.to_string()))?;

        Ok(Self {
            account_id: config.account_id.clone(),
            client_id: config.client_id.clone(),
            client_secret: Secret::new(config.client_secret.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_url: config.token_url.clone(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> MeetingError {
        if err.is_timeout() {
            MeetingError::Timeout(self.timeout_secs)
        } else {
            MeetingError::Network(err.to_string())
        }
    }

    /// OAuth2 account-credentials exchange.
    async fn access_token(&self) -> Result<String, MeetingError> {
        let response = self
            .client
            .post(&self.token_url)
            .query(&[
                ("grant_type", "account_credentials"),
                ("account_id", &self.account_id),
            ])
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("meeting provider token exchange failed");
            return Err(MeetingError::Auth(text));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| MeetingError::Auth(e.to_string()))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl MeetingProvider for ZoomMeetingProvider {
    async fn create_meeting(&self, request: CreateMeetingRequest) -> Result<Meeting, MeetingError> {
        let token = self.access_token().await?;
        let body = CreateMeetingBody {
            topic: &request.topic,
            r#type: MEETING_TYPE_SCHEDULED,
            start_time: &request.start_time,
            duration: request.duration_minutes,
            timezone: &request.timezone,
            settings: MeetingSettings {
                join_before_host: request.join_before_host,
                waiting_room: request.waiting_room,
            },
        };

        let response = self
            .client
            .post(format!("{}/users/me/meetings", self.base_url))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "meeting creation failed");
            return Err(MeetingError::Api(text));
        }

        let created: MeetingResponse = response
            .json()
            .await
            .map_err(|e| MeetingError::IncompleteResponse(e.to_string()))?;

        let id = created
            .id
            .ok_or_else(|| MeetingError::IncompleteResponse("missing meeting id".to_string()))?;
        let join_url = created
            .join_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| MeetingError::IncompleteResponse("missing join URL".to_string()))?;
        let meeting_id = MeetingId::new(id.to_string())
            .map_err(|e| MeetingError::IncompleteResponse(e.to_string()))?;

        tracing::info!(meeting_id = %meeting_id, "meeting created");
        Ok(Meeting {
            id: meeting_id,
            join_url,
            start_time: created.start_time,
        })
    }

    async fn update_meeting(
        &self,
        meeting_id: &MeetingId,
        update: UpdateMeetingRequest,
    ) -> Result<(), MeetingError> {
        let token = self.access_token().await?;
        let body = UpdateMeetingBody {
            topic: update.topic.as_deref(),
            start_time: &update.start_time,
            timezone: &update.timezone,
        };

        let response = self
            .client
            .patch(format!("{}/meetings/{}", self.base_url, meeting_id))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %meeting_id, "meeting update failed");
            return Err(MeetingError::Api(text));
        }

        tracing::info!(%meeting_id, start_time = %update.start_time, "meeting rescheduled");
        Ok(())
    }

    async fn delete_meeting(&self, meeting_id: &MeetingId) -> Result<(), MeetingError> {
        let token = self.access_token().await?;

        let response = self
            .client
            .delete(format!("{}/meetings/{}", self.base_url, meeting_id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %meeting_id, "meeting deletion failed");
            return Err(MeetingError::Api(text));
        }

        tracing::info!(%meeting_id, "meeting deleted");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct CreateMeetingBody<'a> {
    topic: &'a str,
    r#type: u8,
    start_time: &'a str,
    duration: u32,
    timezone: &'a str,
    settings: MeetingSettings,
}

#[derive(Debug, Serialize)]
struct MeetingSettings {
    join_before_host: bool,
    waiting_room: bool,
}

#[derive(Debug, Serialize)]
struct UpdateMeetingBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'a str>,
    start_time: &'a str,
    timezone: &'a str,
}

#[derive(Debug, Deserialize)]
struct MeetingResponse {
    id: Option<u64>,
    join_url: Option<String>,
    start_time: Option<String>,
}
