//! Recipe AI - Credit-metered recipe generation with consultation booking
//!
//! This crate implements the credit ledger and booking lifecycle behind a
//! recipe-generation application: users spend credits to invoke an AI model,
//! buy credit packages through a hosted checkout, and book video
//! consultations that stay consistent with the external meeting host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
