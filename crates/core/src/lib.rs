//! SpendZen Core - domain records, client stores, and configuration.
//!
//! This crate has no network access. The `connect` crate talks to the
//! backend and writes the results into the stores defined here.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod decisions;
pub mod errors;
pub mod goals;
pub mod onboarding;
pub mod savings;
pub mod stores;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
