//! Static sample dataset used when the store is unavailable

use crate::leaderboard::LeaderboardEntry;

/// Name pool for generated demo interns
pub static DEMO_INTERN_NAMES: &[&str] = &[
    "Alice Smith",
    "Bob Jones",
    "Charlie Brown",
    "Diana Prince",
    "Eve Wilson",
];

/// Fixed fallback leaderboard: (name, donations, referral_code)
static SAMPLE_LEADERBOARD: &[(&str, f64, &str)] = &[
    ("Alice Smith", 2450.0, "alice2025"),
    ("Bob Jones", 1700.0, "bob2025"),
    ("Charlie Brown", 3200.0, "charlie2025"),
    ("Diana Prince", 1850.0, "diana2025"),
    ("Eve Wilson", 2100.0, "eve2025"),
    ("Frank Miller", 1450.0, "frank2025"),
    ("Grace Lee", 2750.0, "grace2025"),
    ("Henry Ford", 1950.0, "henry2025"),
];

/// The fallback leaderboard as owned entries, in catalog order (unranked).
pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    SAMPLE_LEADERBOARD
        .iter()
        .map(|(name, donations, referral_code)| LeaderboardEntry {
            name: name.to_string(),
            donations: *donations,
            referral_code: referral_code.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_leaderboard_has_eight_entries() {
        let entries = sample_leaderboard();
        assert_eq!(entries.len(), 8);
    }

    #[test]
    fn test_sample_totals_within_expected_range() {
        for entry in sample_leaderboard() {
            assert!(entry.donations >= 1450.0);
            assert!(entry.donations <= 3200.0);
        }
    }
}
