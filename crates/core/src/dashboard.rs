//! Read model for the home dashboard.

use crate::decisions::DecisionData;
use crate::goals::GoalData;
use crate::stores::AppStores;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub greeting: String,
    pub primary_goal: GoalData,
    /// Clamped to `[0, 100]`.
    pub goal_percent: u8,
    pub total_savings: String,
    pub recent_decisions: Vec<DecisionData>,
}

impl DashboardSummary {
    pub fn from_stores(stores: &AppStores) -> Self {
        let greeting = match stores.user.user() {
            Some(user) if !user.first_name.is_empty() => format!("Welcome, {}!", user.first_name),
            _ => "Welcome!".to_string(),
        };
        let primary_goal = stores
            .goals
            .primary_goal()
            .unwrap_or_else(GoalData::placeholder);
        let goal_percent = primary_goal.display_percent();

        Self {
            greeting,
            goal_percent,
            primary_goal,
            total_savings: stores.savings.savings().formatted(),
            recent_decisions: stores.decisions.recent_decisions(),
        }
    }

    /// `current / target` line under the progress bar.
    pub fn goal_amounts(&self) -> String {
        format!(
            "${} / ${}",
            self.primary_goal.current_amount, self.primary_goal.goal_amount
        )
    }
}
