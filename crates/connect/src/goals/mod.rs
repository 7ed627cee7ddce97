//! Goal data access.

mod goal_sync_service;

pub use goal_sync_service::GoalSyncService;
