//! Assembled view models returned by the dashboard service

use crate::domain::Donation;
use crate::leaderboard::RankedEntry;
use crate::progress::Progress;
use crate::rewards::RewardStatus;

/// Everything the dashboard page needs for one intern
#[derive(Debug, Clone, PartialEq)]
pub struct InternDashboard {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: f64,
    pub rewards: Vec<RewardStatus>,
    /// Newest first, capped at five.
    pub recent_donations: Vec<Donation>,
    pub progress: Progress,
}

/// Ranked leaderboard snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub entries: Vec<RankedEntry>,
    pub total_participants: usize,
    /// Snapshot timestamp (ms since epoch)
    pub last_updated: i64,
}
