use serde::{Deserialize, Serialize};

/// Total amount the user has kept by skipping or discounting purchases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavingsData {
    pub total_savings: f64,
}

impl SavingsData {
    /// Dashboard rendering, e.g. `$1234.56`.
    pub fn formatted(&self) -> String {
        format!("${:.2}", self.total_savings)
    }
}
