//! Onboarding draft: the state collected across the onboarding steps before
//! the first goal is submitted.

use crate::constants::{ONBOARDING_STEPS, SPENDING_CATEGORIES};
use crate::errors::{Error, Result};
use crate::goals::{parse_goal_amount, NewGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Intro,
    GoalDetails,
    Categories,
    Done,
}

impl OnboardingStep {
    fn index(self) -> usize {
        match self {
            OnboardingStep::Intro => 0,
            OnboardingStep::GoalDetails => 1,
            OnboardingStep::Categories => 2,
            OnboardingStep::Done => 3,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => OnboardingStep::Intro,
            1 => OnboardingStep::GoalDetails,
            2 => OnboardingStep::Categories,
            _ => OnboardingStep::Done,
        }
    }
}

/// Outcome of advancing the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(OnboardingStep),
    /// Already on the last step; the draft is ready to submit.
    ReadyToSubmit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingDraft {
    step: OnboardingStep,
    pub goal_name: String,
    /// Raw text as typed, e.g. `"$1,500"`.
    pub goal_amount: String,
    selected_categories: Vec<String>,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingDraft {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Intro,
            goal_name: String::new(),
            goal_amount: String::new(),
            selected_categories: Vec::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    pub fn next(&mut self) -> StepOutcome {
        let index = self.step.index();
        if index + 1 < ONBOARDING_STEPS {
            self.step = OnboardingStep::from_index(index + 1);
            StepOutcome::Moved(self.step)
        } else {
            StepOutcome::ReadyToSubmit
        }
    }

    /// Moves one step back. Returns `false` on the first step, where the
    /// caller should leave onboarding instead.
    pub fn back(&mut self) -> bool {
        match self.step.index() {
            0 => false,
            index => {
                self.step = OnboardingStep::from_index(index - 1);
                true
            }
        }
    }

    /// Selects `category` or, if already selected, deselects it.
    pub fn toggle_category(&mut self, category: &str) -> Result<()> {
        if !SPENDING_CATEGORIES.contains(&category) {
            return Err(Error::Validation(format!(
                "Unknown spending category '{}'",
                category
            )));
        }
        match self.selected_categories.iter().position(|c| c == category) {
            Some(index) => {
                self.selected_categories.remove(index);
            }
            None => self.selected_categories.push(category.to_string()),
        }
        Ok(())
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> f64 {
        (self.step.index() + 1) as f64 / ONBOARDING_STEPS as f64 * 100.0
    }

    /// Builds the goal submission for `user_id`.
    pub fn to_new_goal(&self, user_id: &str) -> Result<NewGoal> {
        let goal = NewGoal {
            goal_name: self.goal_name.trim().to_string(),
            goal_amount: parse_goal_amount(&self.goal_amount)?,
            selected_categories: self.selected_categories.clone(),
            user_id: user_id.to_string(),
        };
        goal.validate()?;
        Ok(goal)
    }
}
