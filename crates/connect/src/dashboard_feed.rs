//! Savings and recent decisions for the dashboard.
//!
//! The backend has no endpoint for either yet, so the shipped feed returns
//! fixed stand-in values. The trait is the seam a real endpoint plugs into.

use async_trait::async_trait;
use log::info;
use serde_json::json;

use spendzen_core::dashboard::DashboardSummary;
use spendzen_core::decisions::DecisionData;
use spendzen_core::errors::{Error, Result};
use spendzen_core::stores::AppStores;

use crate::context::RequestContext;

#[async_trait]
pub trait DashboardFeed: Send + Sync {
    async fn total_savings(&self) -> Result<f64>;
    async fn recent_decisions(&self) -> Result<Vec<DecisionData>>;
}

/// Fixed values shown until the backend serves real ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandInDashboardFeed;

const STAND_IN_TOTAL_SAVINGS: f64 = 1234.56;

#[async_trait]
impl DashboardFeed for StandInDashboardFeed {
    async fn total_savings(&self) -> Result<f64> {
        Ok(STAND_IN_TOTAL_SAVINGS)
    }

    async fn recent_decisions(&self) -> Result<Vec<DecisionData>> {
        let decisions = json!([
            {
                "_id": "1",
                "userId": "user123",
                "itemId": "item001",
                "listedPrice": 100,
                "discountedPrice": 90,
                "discountAmount": 10,
                "finalPrice": 90,
                "decision": "buy",
                "isGift": false,
                "reason": "Needed for work",
                "createdAt": "2025-09-10T12:00:00Z",
                "updatedAt": "2025-09-10T12:00:00Z"
            },
            {
                "_id": "2",
                "userId": "user123",
                "itemId": "item002",
                "listedPrice": 5,
                "discountedPrice": 5,
                "discountAmount": 0,
                "finalPrice": 5,
                "decision": "skip",
                "isGift": false,
                "createdAt": "2025-09-12T08:00:00Z",
                "updatedAt": "2025-09-12T08:00:00Z"
            }
        ]);
        serde_json::from_value(decisions)
            .map_err(|e| Error::Unexpected(format!("Invalid stand-in decisions: {}", e)))
    }
}

/// Replaces savings and recent decisions wholesale and returns the summary.
pub async fn refresh_dashboard(
    feed: &dyn DashboardFeed,
    stores: &AppStores,
    ctx: &RequestContext,
) -> Result<DashboardSummary> {
    let total_savings = ctx.run("load savings", feed.total_savings()).await?;
    let decisions = ctx.run("load decisions", feed.recent_decisions()).await?;
    ctx.ensure_active("refresh dashboard")?;

    info!(
        "[Dashboard] Refreshed savings and {} recent decisions",
        decisions.len()
    );
    stores.savings.set_total_savings(total_savings);
    stores.decisions.set_recent_decisions(decisions);
    Ok(DashboardSummary::from_stores(stores))
}
