//! Meeting provider adapters.

mod mock;
mod zoom_client;

pub use mock::{MeetingCall, MockMeetingProvider};
pub use zoom_client::ZoomMeetingProvider;
