//! User data access: save, fetch, and status check.

mod user_sync_service;

pub use user_sync_service::UserSyncService;
