//! Built-in reward catalog
//!
//! The default rewards every intern can unlock. A deployment can replace
//! this catalog from the store or from `fundboard.toml`.

use super::RewardDefinition;

/// Static reward metadata
#[derive(Debug, Clone)]
pub struct RewardDef {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub required_donations: f64,
    pub icon: &'static str,
}

/// All built-in reward definitions (must be sorted by threshold)
pub static DEFAULT_REWARDS: &[RewardDef] = &[
    RewardDef {
        id: 1,
        title: "First Donation",
        description: "Complete your first donation",
        required_donations: 100.0,
        icon: "🎯",
    },
    RewardDef {
        id: 2,
        title: "Rising Star",
        description: "Reach ₹1000 in donations",
        required_donations: 1000.0,
        icon: "⭐",
    },
    RewardDef {
        id: 3,
        title: "Champion",
        description: "Reach ₹2500 in donations",
        required_donations: 2500.0,
        icon: "🏆",
    },
    RewardDef {
        id: 4,
        title: "Legend",
        description: "Reach ₹5000 in donations",
        required_donations: 5000.0,
        icon: "👑",
    },
];

/// Owned copy of the built-in catalog.
pub fn default_catalog() -> Vec<RewardDefinition> {
    DEFAULT_REWARDS
        .iter()
        .map(|def| RewardDefinition {
            id: def.id,
            title: def.title.to_string(),
            description: def.description.to_string(),
            required_donations: def.required_donations,
            icon: def.icon.to_string(),
        })
        .collect()
}
