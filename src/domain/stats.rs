//! Per-intern statistics models

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one intern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InternStats {
    pub total_donations: f64,
    /// Distinct donors across all donations (blank names count as one
    /// "Anonymous" donor).
    pub total_donors: u64,
    pub average_donation: f64,
    pub this_month: MonthWindow,
    /// Six most recent months, oldest first.
    pub donation_trend: Vec<TrendPoint>,
}

/// Current-month activity window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthWindow {
    pub donations: f64,
    pub donors: u64,
    /// Percent change versus the previous month.
    pub growth: f64,
}

/// One month of donation volume for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Short month label, e.g. "Jan"
    pub month: String,
    pub amount: f64,
}

/// Comparison of a value against the previous period
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendValue {
    pub current: f64,
    pub previous: f64,
}

impl TrendValue {
    pub fn percent_change(&self) -> f64 {
        if self.previous == 0.0 {
            if self.current > 0.0 { 100.0 } else { 0.0 }
        } else {
            ((self.current - self.previous) / self.previous) * 100.0
        }
    }
}
