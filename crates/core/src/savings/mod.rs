//! Savings module.

mod savings_model;

pub use savings_model::SavingsData;
