//! Goals module - savings goal records, validation, and progress math.

mod goals_model;
mod goals_progress;

pub use goals_model::{GoalData, GoalStatus, NewGoal};
pub use goals_progress::{display_percent, parse_goal_amount, progress_percent};
