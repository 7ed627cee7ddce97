//! Decisions module - considered purchases.

mod decisions_model;

pub use decisions_model::{DecisionData, DecisionKind};
