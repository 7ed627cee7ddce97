//! Decision domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the user did about a purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Considered,
    Buy,
    Skip,
}

/// A considered purchase and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionData {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub item_id: String,
    pub listed_price: f64,
    pub discounted_price: f64,
    pub discount_amount: f64,
    pub final_price: f64,
    pub decision: DecisionKind,
    #[serde(default)]
    pub is_gift: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
