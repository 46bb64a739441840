//! Request and response types for the dashboard API

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Donation, Intern, InternStats};
use crate::leaderboard::RankedEntry;
use crate::progress::Progress;
use crate::provider::Provenance;
use crate::rewards::RewardStatus;
use crate::service::{InternDashboard, Leaderboard};

/// GET /api/interns/<id>/dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: f64,
    pub rewards: Vec<RewardStatus>,
    pub recent_donations: Vec<DonationView>,
    pub progress: Progress,
    /// "store" or "fallback"
    pub source: &'static str,
}

impl DashboardResponse {
    pub fn new(dashboard: InternDashboard, source: Provenance) -> Self {
        Self {
            id: dashboard.id,
            name: dashboard.name,
            email: dashboard.email,
            referral_code: dashboard.referral_code,
            total_donations: dashboard.total_donations,
            rewards: dashboard.rewards,
            recent_donations: dashboard
                .recent_donations
                .iter()
                .map(DonationView::from)
                .collect(),
            progress: dashboard.progress,
            source: source.as_str(),
        }
    }
}

/// One donation row on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DonationView {
    pub amount: f64,
    pub donor_name: String,
    /// "YYYY-MM-DD HH:MM"
    pub date: String,
}

impl From<&Donation> for DonationView {
    fn from(donation: &Donation) -> Self {
        Self {
            amount: donation.amount,
            donor_name: donation.display_donor().to_string(),
            date: format_minute(donation.created_at),
        }
    }
}

/// GET /api/leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardRow>,
    pub total_participants: usize,
    /// RFC 3339 snapshot timestamp
    pub last_updated: String,
    pub source: &'static str,
}

impl LeaderboardResponse {
    pub fn new(board: Leaderboard, source: Provenance) -> Self {
        Self {
            leaderboard: board.entries.iter().map(LeaderboardRow::from).collect(),
            total_participants: board.total_participants,
            last_updated: format_rfc3339(board.last_updated),
            source: source.as_str(),
        }
    }
}

/// One row of the ranked leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub donations: f64,
    pub referral_code: String,
    /// Badge emoji for the row's rank
    pub badge: &'static str,
}

impl From<&RankedEntry> for LeaderboardRow {
    fn from(ranked: &RankedEntry) -> Self {
        Self {
            rank: ranked.rank,
            name: ranked.entry.name.clone(),
            donations: ranked.entry.donations,
            referral_code: ranked.entry.referral_code.clone(),
            badge: ranked.badge.icon(),
        }
    }
}

/// GET /api/interns/<id>/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: InternStats,
    pub source: &'static str,
}

/// POST /api/interns
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

/// Intern fields echoed back after registration
#[derive(Debug, Clone, Serialize)]
pub struct InternView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: f64,
}

impl From<Intern> for InternView {
    fn from(intern: Intern) -> Self {
        Self {
            id: intern.id,
            name: intern.name,
            email: intern.email,
            referral_code: intern.referral_code,
            total_donations: intern.total_donations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub intern: InternView,
    pub source: &'static str,
}

fn format_minute(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn format_rfc3339(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::{Badge, LeaderboardEntry};

    #[test]
    fn test_donation_view_formats_date_and_donor() {
        let donation = Donation {
            intern_id: 1,
            amount: 500.0,
            donor_name: String::new(),
            donor_email: String::new(),
            created_at: 1705329000000, // 2024-01-15 14:30 UTC
        };
        let view = DonationView::from(&donation);
        assert_eq!(view.donor_name, "Anonymous");
        assert_eq!(view.date, "2024-01-15 14:30");
    }

    #[test]
    fn test_leaderboard_row_carries_badge_icon() {
        let ranked = RankedEntry {
            entry: LeaderboardEntry {
                name: "Charlie Brown".to_string(),
                donations: 3200.0,
                referral_code: "charlie2025".to_string(),
            },
            rank: 1,
            badge: Badge::Gold,
        };
        let row = LeaderboardRow::from(&ranked);
        assert_eq!(row.badge, "🥇");
        assert_eq!(row.rank, 1);
    }

    #[test]
    fn test_reward_status_serializes_flat() {
        let statuses = crate::rewards::evaluate(150.0, &crate::rewards::default_catalog()).unwrap();
        let json = serde_json::to_value(&statuses[0]).unwrap();
        assert_eq!(json["title"], "First Donation");
        assert_eq!(json["unlocked"], true);
        assert_eq!(json["required_donations"], 100.0);
    }
}
