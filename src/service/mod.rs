//! Dashboard service
//!
//! Composes the tier engine, reward evaluation, and leaderboard ranking
//! over an injected [`DonationSource`]. Store failures and unknown interns
//! are answered from the demo fallback and tagged with
//! [`Provenance::Fallback`] so callers can tell the difference; invalid
//! input always propagates.

mod models;

pub use models::{InternDashboard, Leaderboard};

use chrono::Utc;
use tracing::warn;

use crate::domain::{FundboardError, Intern, InternStats};
use crate::leaderboard;
use crate::progress::Progress;
use crate::provider::{DemoDataSource, DonationSource, Provenance, Sourced};
use crate::rewards::{self, RewardDefinition};

/// Donations shown in the dashboard's recent list.
const RECENT_DONATION_LIMIT: usize = 5;

/// Query service over an injected donation source
pub struct DashboardService<S: DonationSource> {
    source: S,
    fallback: DemoDataSource,
    catalog_override: Option<Vec<RewardDefinition>>,
}

impl<S: DonationSource> DashboardService<S> {
    pub fn new(source: S, fallback: DemoDataSource) -> Self {
        Self {
            source,
            fallback,
            catalog_override: None,
        }
    }

    /// Use a fixed reward catalog (from config) instead of the source's.
    pub fn with_catalog(mut self, catalog: Vec<RewardDefinition>) -> Self {
        self.catalog_override = Some(catalog);
        self
    }

    /// Dashboard payload for one intern.
    pub fn dashboard(&self, intern_id: i64) -> Result<Sourced<InternDashboard>, FundboardError> {
        match self.build_dashboard(&self.source, intern_id) {
            Ok(dashboard) => Ok(Sourced::from_store(dashboard)),
            Err(err) if err.is_fallback_eligible() => {
                warn!("Dashboard for intern #{} from demo data: {}", intern_id, err);
                self.build_dashboard(&self.fallback, intern_id)
                    .map(Sourced::from_fallback)
            }
            Err(err) => Err(err),
        }
    }

    /// Ranked, badge-annotated leaderboard over all participants.
    pub fn leaderboard(&self) -> Result<Sourced<Leaderboard>, FundboardError> {
        let (entries, source) = match self.source.leaderboard_entries() {
            Ok(entries) => (entries, Provenance::Store),
            Err(err) if err.is_fallback_eligible() => {
                warn!("Leaderboard from demo data: {}", err);
                (self.fallback.leaderboard_entries()?, Provenance::Fallback)
            }
            Err(err) => return Err(err),
        };

        let ranked = leaderboard::rank(entries);
        Ok(Sourced {
            value: Leaderboard {
                total_participants: ranked.len(),
                entries: ranked,
                last_updated: Utc::now().timestamp_millis(),
            },
            source,
        })
    }

    /// Aggregate statistics for one intern.
    pub fn stats(&self, intern_id: i64) -> Result<Sourced<InternStats>, FundboardError> {
        match self.source.intern_stats(intern_id) {
            Ok(stats) => Ok(Sourced::from_store(stats)),
            Err(err) if err.is_fallback_eligible() => {
                warn!("Stats for intern #{} from demo data: {}", intern_id, err);
                self.fallback
                    .intern_stats(intern_id)
                    .map(Sourced::from_fallback)
            }
            Err(err) => Err(err),
        }
    }

    /// Register a new intern (demo endpoint).
    pub fn register(&self, name: &str, email: &str) -> Result<Sourced<Intern>, FundboardError> {
        match self.source.create_intern(name, email) {
            Ok(intern) => Ok(Sourced::from_store(intern)),
            Err(err) if err.is_fallback_eligible() => {
                warn!("Registering '{}' against demo data: {}", name, err);
                self.fallback
                    .create_intern(name, email)
                    .map(Sourced::from_fallback)
            }
            Err(err) => Err(err),
        }
    }

    fn build_dashboard(
        &self,
        source: &dyn DonationSource,
        intern_id: i64,
    ) -> Result<InternDashboard, FundboardError> {
        let intern = source.intern(intern_id)?;
        let recent_donations = source.recent_donations(intern_id, RECENT_DONATION_LIMIT)?;
        let catalog = self.catalog(source)?;

        let rewards = rewards::evaluate(intern.total_donations, &catalog)?;
        let progress = Progress::for_total(intern.total_donations)?;

        Ok(InternDashboard {
            id: intern.id,
            name: intern.name,
            email: intern.email,
            referral_code: intern.referral_code,
            total_donations: intern.total_donations,
            rewards,
            recent_donations,
            progress,
        })
    }

    fn catalog(
        &self,
        source: &dyn DonationSource,
    ) -> Result<Vec<RewardDefinition>, FundboardError> {
        match &self.catalog_override {
            Some(catalog) => Ok(catalog.clone()),
            None => source.reward_catalog(),
        }
    }
}
