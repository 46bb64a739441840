//! Donation tiers and milestone progress
//!
//! Maps a cumulative donation total to a named tier, the next milestone
//! threshold, and a progress percentage within the current milestone band.

use serde::Serialize;

use crate::domain::FundboardError;

/// Donation tier definition
#[derive(Debug, Clone)]
pub struct Tier {
    pub title: &'static str,
    /// Inclusive lower bound: a total exactly at the threshold is in the tier.
    pub min_donations: f64,
}

/// All tier definitions (must be sorted by threshold)
pub static TIERS: &[Tier] = &[
    Tier {
        title: "Beginner",
        min_donations: 0.0,
    },
    Tier {
        title: "Starter",
        min_donations: 100.0,
    },
    Tier {
        title: "Rising Star",
        min_donations: 1000.0,
    },
    Tier {
        title: "Champion",
        min_donations: 2500.0,
    },
    Tier {
        title: "Legend",
        min_donations: 5000.0,
    },
];

/// Milestone thresholds (strictly increasing; the last entry is a ceiling)
pub static MILESTONES: &[f64] = &[100.0, 1000.0, 2500.0, 5000.0, 10000.0];

impl Tier {
    /// Find the tier for a given donation total.
    ///
    /// Assumes `total` has already been validated as non-negative.
    pub fn for_total(total: f64) -> &'static Tier {
        TIERS
            .iter()
            .rev()
            .find(|t| total >= t.min_donations)
            .unwrap_or(&TIERS[0])
    }
}

/// Smallest milestone strictly greater than `total`.
///
/// Totals at or beyond the final milestone get the final milestone back:
/// the sequence ends and no further target is signaled.
pub fn next_milestone(total: f64) -> f64 {
    MILESTONES
        .iter()
        .copied()
        .find(|m| total < *m)
        .unwrap_or(MILESTONES[MILESTONES.len() - 1])
}

/// Milestone immediately before `next` in the sequence (0 for the first band).
fn previous_milestone(next: f64) -> f64 {
    MILESTONES
        .iter()
        .copied()
        .take_while(|m| *m < next)
        .last()
        .unwrap_or(0.0)
}

/// Milestone progress derived from a donation total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub current_level: String,
    pub next_milestone: f64,
    pub progress_percentage: f64,
}

impl Progress {
    /// Compute tier, next milestone, and in-band progress for a total.
    ///
    /// Progress is measured within the band `[previous, next)` of the
    /// milestone sequence. Totals past the final milestone keep the last
    /// band `[5000, 10000]`, so the percentage exceeds 100 for totals
    /// above 10000 rather than resetting or clamping.
    pub fn for_total(total: f64) -> Result<Self, FundboardError> {
        if !total.is_finite() || total < 0.0 {
            return Err(FundboardError::InvalidAmount(total));
        }

        let tier = Tier::for_total(total);
        let next = next_milestone(total);
        let previous = previous_milestone(next);

        Ok(Self {
            current_level: tier.title.to_string(),
            next_milestone: next,
            progress_percentage: (total - previous) / (next - previous) * 100.0,
        })
    }
}
