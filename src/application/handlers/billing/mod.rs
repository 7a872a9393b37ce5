//! Credit purchase flow.

mod create_checkout;

pub use create_checkout::{CheckoutError, CreateCheckoutCommand, CreateCheckoutHandler};
