//! Seedable demo-data source
//!
//! Stands in for the store during demos and whenever the real store is
//! unreachable. Everything is derived from a fixed seed plus the request
//! input, so repeated calls with the same input return identical data.

use tracing::debug;

use super::DonationSource;
use super::sample::{DEMO_INTERN_NAMES, sample_leaderboard};
use crate::domain::{Donation, FundboardError, Intern, InternStats, MonthWindow, TrendPoint};
use crate::leaderboard::LeaderboardEntry;
use crate::rewards::{RewardDefinition, default_catalog};

/// Canned recent donations shown on demo dashboards:
/// (amount, donor, timestamp ms)
static DEMO_DONATIONS: &[(f64, &str, i64)] = &[
    (500.0, "John Doe", 1705329000000),
    (250.0, "Jane Smith", 1705227300000),
    (750.0, "", 1705164300000),
];

static DEMO_TREND_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Deterministic PRNG (xorshift64)
struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-ish value in `[lo, hi]`.
    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

/// Demo data generator keyed by a fixed seed.
pub struct DemoDataSource {
    seed: u64,
}

impl DemoDataSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from OS entropy; falls back to wall clock + pid if the OS RNG
    /// is unavailable.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_ok() {
            return Self::new(u64::from_le_bytes(bytes));
        }

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let pid = std::process::id() as u64;
        Self::new(nanos ^ pid.rotate_left(17))
    }

    /// Per-intern PRNG: same seed + same id, same stream.
    fn rng_for(&self, key: u64) -> Xorshift64 {
        Xorshift64::new(self.seed ^ key.wrapping_mul(0x9E3779B97F4A7C15))
    }

    fn demo_name(id: i64) -> &'static str {
        DEMO_INTERN_NAMES[(id.unsigned_abs() as usize) % DEMO_INTERN_NAMES.len()]
    }

    fn demo_email(name: &str) -> String {
        format!("{}@example.com", name.to_lowercase().replace(' ', "."))
    }

    fn referral_code(name: &str, rng: &mut Xorshift64) -> String {
        let first = name.split_whitespace().next().unwrap_or("intern");
        format!("{}{}", first.to_lowercase(), rng.next_in(1000, 9999))
    }
}

impl DonationSource for DemoDataSource {
    fn intern(&self, id: i64) -> Result<Intern, FundboardError> {
        debug!("Generating demo intern #{}", id);
        let mut rng = self.rng_for(id as u64);
        let name = Self::demo_name(id);
        let total = rng.next_in(1000, 5000) as f64;

        Ok(Intern {
            id,
            name: name.to_string(),
            email: Self::demo_email(name),
            referral_code: Self::referral_code(name, &mut rng),
            total_donations: total,
            created_at: 0,
        })
    }

    fn recent_donations(
        &self,
        intern_id: i64,
        limit: usize,
    ) -> Result<Vec<Donation>, FundboardError> {
        Ok(DEMO_DONATIONS
            .iter()
            .take(limit)
            .map(|(amount, donor, created_at)| Donation {
                intern_id,
                amount: *amount,
                donor_name: donor.to_string(),
                donor_email: String::new(),
                created_at: *created_at,
            })
            .collect())
    }

    fn leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>, FundboardError> {
        Ok(sample_leaderboard())
    }

    fn reward_catalog(&self) -> Result<Vec<RewardDefinition>, FundboardError> {
        Ok(default_catalog())
    }

    fn intern_stats(&self, intern_id: i64) -> Result<InternStats, FundboardError> {
        // Separate stream from `intern` so dashboard and stats endpoints
        // stay independently stable.
        let mut rng = self.rng_for((intern_id as u64).rotate_left(32) | 1);

        let total = rng.next_in(1000, 5000) as f64;
        let donors = rng.next_in(10, 50);
        let average = rng.next_in(100, 500) as f64;
        let month_donations = rng.next_in(200, 1000) as f64;
        let month_donors = rng.next_in(5, 15);
        let growth = rng.next_in(0, 60) as f64 - 10.0;

        let donation_trend = DEMO_TREND_MONTHS
            .iter()
            .map(|month| TrendPoint {
                month: month.to_string(),
                amount: rng.next_in(200, 800) as f64,
            })
            .collect();

        Ok(InternStats {
            total_donations: total,
            total_donors: donors,
            average_donation: average,
            this_month: MonthWindow {
                donations: month_donations,
                donors: month_donors,
                growth,
            },
            donation_trend,
        })
    }

    fn create_intern(&self, name: &str, email: &str) -> Result<Intern, FundboardError> {
        let key = name
            .bytes()
            .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(b as u64));
        let mut rng = self.rng_for(key);

        Ok(Intern {
            id: rng.next_in(1, 1000) as i64,
            name: name.to_string(),
            email: email.to_string(),
            referral_code: Self::referral_code(name, &mut rng),
            total_donations: 0.0,
            created_at: 0,
        })
    }
}
