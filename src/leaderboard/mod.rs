//! Leaderboard ranking and badge assignment

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One participant on the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub donations: f64,
    pub referral_code: String,
}

/// Rank-derived decoration for a leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
    TopTen,
    Participant,
}

impl Badge {
    /// Badge for a 1-based rank.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            4..=10 => Self::TopTen,
            _ => Self::Participant,
        }
    }

    /// The emoji shown on the dashboard.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::TopTen => "🏅",
            Self::Participant => "🎖️",
        }
    }
}

/// A leaderboard entry with its query-time rank and badge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    /// 1-based position after sorting.
    pub rank: usize,
    pub badge: Badge,
}

/// Rank entries by donations, highest first.
///
/// The sort is stable, so entries with equal totals keep their input order.
/// That tie-break is part of the contract: repeated calls over the same
/// input produce identical output.
pub fn rank(entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    let mut sorted = entries;
    sorted.sort_by(|a, b| {
        b.donations
            .partial_cmp(&a.donations)
            .unwrap_or(Ordering::Equal)
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index + 1,
            badge: Badge::for_rank(index + 1),
            entry,
        })
        .collect()
}
