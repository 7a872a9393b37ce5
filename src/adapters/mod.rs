//! Adapters - Concrete implementations of the ports.
//!
//! Live adapters talk HTTP to the real providers; each has a mock
//! counterpart for tests. All adapters are constructed from explicit
//! config objects - no module-level clients, no environment reads at
//! call time.

pub mod ai;
pub mod auth;
pub mod email;
pub mod meetings;
pub mod storage;
pub mod stripe;
