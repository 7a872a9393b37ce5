//! Credits domain - per-user credit balances and purchase records.
//!
//! One credit buys one recipe generation. Balances are replenished by
//! purchasing one of a fixed set of credit packages.

mod account;
mod errors;
mod packages;
mod transaction;

pub use account::CreditAccount;
pub use errors::CreditError;
pub use packages::{CreditPackage, PACKAGES};
pub use transaction::{Transaction, TransactionStatus};
