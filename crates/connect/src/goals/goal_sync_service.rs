use std::sync::Arc;

use log::info;

use spendzen_core::errors::{Error, Result};
use spendzen_core::goals::{GoalData, NewGoal};
use spendzen_core::onboarding::OnboardingDraft;
use spendzen_core::stores::{GoalStore, UserStore};

use crate::client::BackendApi;
use crate::context::RequestContext;

/// Submits goals to the backend and merges the result into the goal store.
pub struct GoalSyncService {
    api: Arc<dyn BackendApi>,
    goals: GoalStore,
    user: UserStore,
}

impl GoalSyncService {
    pub fn new(api: Arc<dyn BackendApi>, goals: GoalStore, user: UserStore) -> Self {
        Self { api, goals, user }
    }

    pub async fn save_goal(&self, new_goal: &NewGoal, ctx: &RequestContext) -> Result<GoalData> {
        new_goal.validate()?;
        let goal = ctx.run("save goal", self.api.save_goal(new_goal)).await?;
        ctx.ensure_active("save goal")?;

        info!(
            "[Backend] Saved goal {} ({})",
            goal.id.as_deref().unwrap_or("<no id>"),
            goal.goal_name
        );
        self.goals.add_goal(goal.clone());
        Ok(goal)
    }

    /// Submits the onboarding draft as the signed-in user's first goal.
    pub async fn submit_onboarding(
        &self,
        draft: &OnboardingDraft,
        ctx: &RequestContext,
    ) -> Result<GoalData> {
        let user_id = self.user.user_id().ok_or_else(|| {
            Error::Validation("A signed-in user is required to save a goal".to_string())
        })?;
        let new_goal = draft.to_new_goal(&user_id)?;
        self.save_goal(&new_goal, ctx).await
    }
}
