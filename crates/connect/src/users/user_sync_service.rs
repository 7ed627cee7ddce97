use std::sync::Arc;

use log::{debug, info};

use spendzen_core::errors::Result;
use spendzen_core::stores::UserStore;
use spendzen_core::users::{IdentityUser, SaveUserPayload, UserData, UserStatus};

use crate::client::BackendApi;
use crate::context::RequestContext;

/// Talks to the user endpoints and keeps the user store in sync.
///
/// The store is only written after a successful response whose scope is
/// still alive, and only if no later-issued user write has landed first.
pub struct UserSyncService {
    api: Arc<dyn BackendApi>,
    store: UserStore,
}

impl UserSyncService {
    pub fn new(api: Arc<dyn BackendApi>, store: UserStore) -> Self {
        Self { api, store }
    }

    /// Registers (or refreshes) the identity-provider user with the backend.
    pub async fn save_user(&self, identity: &IdentityUser, ctx: &RequestContext) -> Result<UserData> {
        let payload = SaveUserPayload::from(identity);
        let ticket = self.store.issue_ticket();
        let user = ctx.run("save user", self.api.save_user(&payload)).await?;
        ctx.ensure_active("save user")?;

        if self.store.apply_ticketed(ticket, user.clone()) {
            info!("[Backend] Saved user {}", user.id);
        }
        Ok(user)
    }

    pub async fn fetch_user(&self, clerk_id: &str, ctx: &RequestContext) -> Result<UserData> {
        let ticket = self.store.issue_ticket();
        let user = ctx.run("fetch user", self.api.get_user(clerk_id)).await?;
        ctx.ensure_active("fetch user")?;

        if self.store.apply_ticketed(ticket, user.clone()) {
            info!("[Backend] Loaded user {}", user.id);
        }
        Ok(user)
    }

    /// Asks whether the user is known and has a goal. A known user returned
    /// with the status replaces the store's user.
    pub async fn check_user_status(
        &self,
        clerk_id: &str,
        ctx: &RequestContext,
    ) -> Result<UserStatus> {
        let ticket = self.store.issue_ticket();
        let status = ctx
            .run("check user status", self.api.get_user_status(clerk_id))
            .await?;
        ctx.ensure_active("check user status")?;

        match (&status.user, status.user_exists) {
            (Some(user), true) => {
                self.store.apply_ticketed(ticket, user.clone());
            }
            _ => debug!(
                "[Backend] Status for {}: exists={}, has_goal={}",
                clerk_id, status.user_exists, status.has_goal
            ),
        }
        Ok(status)
    }
}
