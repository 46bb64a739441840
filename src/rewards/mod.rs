//! Reward catalog and unlock evaluation

mod definitions;

pub use definitions::{DEFAULT_REWARDS, RewardDef, default_catalog};

use serde::{Deserialize, Serialize};

use crate::domain::FundboardError;

/// An unlockable reward keyed by a donation threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardDefinition {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub required_donations: f64,
    pub icon: String,
}

/// A catalog entry together with its derived unlock state.
///
/// Unlock state is never stored; it is recomputed from the donation total
/// on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardStatus {
    #[serde(flatten)]
    pub reward: RewardDefinition,
    pub unlocked: bool,
}

/// Evaluate which catalog entries a donation total unlocks.
///
/// Catalog order and identity are preserved; an empty catalog yields an
/// empty result. Negative or non-finite totals are rejected.
pub fn evaluate(
    total: f64,
    catalog: &[RewardDefinition],
) -> Result<Vec<RewardStatus>, FundboardError> {
    if !total.is_finite() || total < 0.0 {
        return Err(FundboardError::InvalidAmount(total));
    }

    Ok(catalog
        .iter()
        .map(|reward| RewardStatus {
            reward: reward.clone(),
            unlocked: total >= reward.required_donations,
        })
        .collect())
}
