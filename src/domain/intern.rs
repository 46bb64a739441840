//! Intern and donation models

use serde::{Deserialize, Serialize};

/// A fundraising intern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intern {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Unique code interns share with donors, e.g. "alice2025"
    pub referral_code: String,
    /// Cumulative donation total. Non-decreasing over the intern's lifetime;
    /// updated whenever a donation is recorded.
    pub total_donations: f64,
    /// Created timestamp (ms since epoch)
    pub created_at: i64,
}

/// A single donation attributed to an intern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub intern_id: i64,
    pub amount: f64,
    /// Empty when the donor chose not to leave a name.
    pub donor_name: String,
    pub donor_email: String,
    /// Created timestamp (ms since epoch)
    pub created_at: i64,
}

impl Donation {
    /// Donor name as shown on the dashboard ("Anonymous" when blank).
    pub fn display_donor(&self) -> &str {
        if self.donor_name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.donor_name
        }
    }
}
