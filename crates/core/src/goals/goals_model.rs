//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_GOAL_NAME;
use crate::errors::{Error, Result};

use super::goals_progress::{display_percent, progress_percent};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalData {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub goal_name: String,
    #[serde(default)]
    pub current_amount: f64,
    pub goal_amount: f64,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub selected_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GoalData {
    /// Stand-in shown on the dashboard while the user has no goal.
    ///
    /// The target of 1 keeps the progress computation finite.
    pub fn placeholder() -> Self {
        Self {
            id: None,
            user_id: String::new(),
            goal_name: PLACEHOLDER_GOAL_NAME.to_string(),
            current_amount: 0.0,
            goal_amount: 1.0,
            status: GoalStatus::Active,
            selected_categories: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Raw percentage; not clamped, non-finite for a zero target.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_amount, self.goal_amount)
    }

    /// Percentage as the dashboard shows it.
    pub fn display_percent(&self) -> u8 {
        display_percent(self.current_amount, self.goal_amount)
    }
}

/// Input model for `POST /goal/save`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_name: String,
    pub goal_amount: f64,
    pub selected_categories: Vec<String>,
    pub user_id: String,
}

impl NewGoal {
    /// Rejects goals the dashboard cannot display meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.goal_name.trim().is_empty() {
            return Err(Error::Validation("Goal name is required".to_string()));
        }
        if !self.goal_amount.is_finite() || self.goal_amount <= 0.0 {
            return Err(Error::Validation(format!(
                "Goal amount must be greater than zero, got {}",
                self.goal_amount
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(
                "A signed-in user is required to save a goal".to_string(),
            ));
        }
        Ok(())
    }
}
