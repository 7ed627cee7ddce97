//! SpendZen Connect - backend access for the SpendZen client.
//!
//! This crate owns every network call. Results are normalized into the
//! records of `spendzen-core` and written into its stores.

pub mod client;
pub mod context;
pub mod dashboard_feed;
pub mod goals;
pub mod handoff;
pub mod users;

// Re-export commonly used types
pub use client::{BackendApi, BackendApiClient};
pub use context::{RequestContext, RequestScope};
pub use dashboard_feed::{refresh_dashboard, DashboardFeed, StandInDashboardFeed};
pub use goals::GoalSyncService;
pub use handoff::{AuthHandoff, NextScreen};
pub use users::UserSyncService;
