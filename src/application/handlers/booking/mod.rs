//! Booking lifecycle operations.

mod cancel_booking;
mod create_booking;
mod reschedule_booking;

pub use cancel_booking::{CancelBookingCommand, CancelBookingHandler};
pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use reschedule_booking::{RescheduleBookingCommand, RescheduleBookingHandler};
