//! [`DonationSource`] implementation backed by the SQLite store

use tracing::debug;

use super::DonationDb;
use super::repository::{InternRepository, RewardRepository};
use crate::domain::{Donation, FundboardError, Intern, InternStats};
use crate::leaderboard::LeaderboardEntry;
use crate::provider::DonationSource;
use crate::rewards::{RewardDefinition, default_catalog};

/// Store-backed donation source
pub struct SqliteSource {
    interns: InternRepository,
    rewards: RewardRepository,
}

impl SqliteSource {
    pub fn new(db: DonationDb) -> Self {
        Self {
            interns: InternRepository::new(db.clone()),
            rewards: RewardRepository::new(db),
        }
    }
}

fn store_err(err: anyhow::Error) -> FundboardError {
    FundboardError::StoreUnavailable(err.to_string())
}

/// Referral code in the `<first name><4 digits>` shape interns share with
/// donors.
fn generate_referral_code(name: &str) -> String {
    let first = name
        .split_whitespace()
        .next()
        .unwrap_or("intern")
        .to_lowercase();

    let mut bytes = [0u8; 2];
    let digits = if getrandom::getrandom(&mut bytes).is_ok() {
        1000 + (u16::from_le_bytes(bytes) as u32) % 9000
    } else {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        1000 + nanos % 9000
    };

    format!("{first}{digits}")
}

impl DonationSource for SqliteSource {
    fn intern(&self, id: i64) -> Result<Intern, FundboardError> {
        self.interns
            .get(id)
            .map_err(store_err)?
            .ok_or(FundboardError::UnknownIntern(id))
    }

    fn recent_donations(
        &self,
        intern_id: i64,
        limit: usize,
    ) -> Result<Vec<Donation>, FundboardError> {
        self.interns
            .recent_donations(intern_id, limit)
            .map_err(store_err)
    }

    fn leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>, FundboardError> {
        self.interns.leaderboard_entries().map_err(store_err)
    }

    fn reward_catalog(&self) -> Result<Vec<RewardDefinition>, FundboardError> {
        let stored = self.rewards.catalog().map_err(store_err)?;
        if stored.is_empty() {
            debug!("Reward table empty, using built-in catalog");
            return Ok(default_catalog());
        }
        Ok(stored)
    }

    fn intern_stats(&self, intern_id: i64) -> Result<InternStats, FundboardError> {
        self.interns
            .stats(intern_id)
            .map_err(store_err)?
            .ok_or(FundboardError::UnknownIntern(intern_id))
    }

    fn create_intern(&self, name: &str, email: &str) -> Result<Intern, FundboardError> {
        let referral_code = generate_referral_code(name);
        self.interns
            .create(name, email, &referral_code)
            .map_err(store_err)
    }
}
