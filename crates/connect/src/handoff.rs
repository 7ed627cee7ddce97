//! Authentication hand-off: what happens after the identity provider
//! reports a completed sign-up or sign-in.

use log::info;

use spendzen_core::errors::Result;
use spendzen_core::stores::AppStores;
use spendzen_core::users::IdentityUser;

use crate::context::RequestContext;
use crate::users::UserSyncService;

/// Where the front end should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextScreen {
    Welcome,
    Register,
    Onboarding,
    Home,
}

pub struct AuthHandoff {
    users: UserSyncService,
    stores: AppStores,
}

impl AuthHandoff {
    pub fn new(users: UserSyncService, stores: AppStores) -> Self {
        Self { users, stores }
    }

    /// A new account always starts with onboarding.
    pub async fn complete_sign_up(
        &self,
        identity: &IdentityUser,
        ctx: &RequestContext,
    ) -> Result<NextScreen> {
        self.users.save_user(identity, ctx).await?;
        Ok(NextScreen::Onboarding)
    }

    pub async fn complete_sign_in(&self, clerk_id: &str, ctx: &RequestContext) -> Result<NextScreen> {
        let status = self.users.check_user_status(clerk_id, ctx).await?;
        let next = if !status.user_exists {
            NextScreen::Register
        } else if !status.has_goal {
            NextScreen::Onboarding
        } else {
            NextScreen::Home
        };
        info!("[Auth] Signed in {}, continuing to {:?}", clerk_id, next);
        Ok(next)
    }

    pub fn sign_out(&self) -> NextScreen {
        self.stores.reset();
        NextScreen::Welcome
    }
}
