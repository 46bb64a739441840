//! Data provider boundary
//!
//! All donation reads go through [`DonationSource`] so the service layer can
//! swap the SQLite store for demo data without touching the computations.
//! No process-wide state: a source is constructed once and injected.

mod demo;
mod sample;

pub use demo::DemoDataSource;
pub use sample::{DEMO_INTERN_NAMES, sample_leaderboard};

use serde::Serialize;

use crate::domain::{Donation, FundboardError, Intern, InternStats};
use crate::leaderboard::LeaderboardEntry;
use crate::rewards::RewardDefinition;

/// Where a response's data actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Read from the persistent store.
    Store,
    /// The store was unavailable (or the record missing) and demo data was
    /// substituted.
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Fallback => "fallback",
        }
    }
}

/// A value tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Provenance,
}

impl<T> Sourced<T> {
    pub fn from_store(value: T) -> Self {
        Self {
            value,
            source: Provenance::Store,
        }
    }

    pub fn from_fallback(value: T) -> Self {
        Self {
            value,
            source: Provenance::Fallback,
        }
    }
}

/// One method per fetch operation the dashboard needs.
///
/// Implementations must be pure reads apart from `create_intern`; every
/// call recomputes from current data, nothing is cached across calls.
pub trait DonationSource {
    fn intern(&self, id: i64) -> Result<Intern, FundboardError>;

    /// Most recent donations for an intern, newest first.
    fn recent_donations(&self, intern_id: i64, limit: usize)
    -> Result<Vec<Donation>, FundboardError>;

    fn leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>, FundboardError>;

    fn reward_catalog(&self) -> Result<Vec<RewardDefinition>, FundboardError>;

    fn intern_stats(&self, intern_id: i64) -> Result<InternStats, FundboardError>;

    fn create_intern(&self, name: &str, email: &str) -> Result<Intern, FundboardError>;
}
