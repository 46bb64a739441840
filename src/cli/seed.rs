//! Seed command implementation
//!
//! Creates the SQLite store and loads the sample dataset so the dashboard
//! has something to show before real donations arrive.

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use fundboard::config::Config;
use fundboard::provider::sample_leaderboard;
use fundboard::rewards::default_catalog;
use fundboard::store::{DonationDb, InternRepository, RewardRepository};

/// Sample donors cycled through the seeded donation history.
static SEED_DONORS: &[&str] = &["John Doe", "Jane Smith", "", "Priya Nair"];

/// Create the database and load sample interns, donations, and rewards.
pub async fn seed_command(config: &Config, reset: bool) -> Result<()> {
    let db_path = config.db_path();
    let db = DonationDb::open(&db_path)?;

    if reset {
        info!("Resetting existing data in {}", db_path.display());
        db.reset_all()?;
    }

    let interns = InternRepository::new(db.clone());
    let rewards = RewardRepository::new(db);

    let catalog = config.reward_catalog().unwrap_or_else(default_catalog);
    rewards.replace_catalog(&catalog)?;

    let now = Utc::now().timestamp_millis();
    let month_ms: i64 = 30 * 24 * 60 * 60 * 1000;

    let mut seeded = 0usize;
    for (index, entry) in sample_leaderboard().into_iter().enumerate() {
        let email = format!(
            "{}@example.com",
            entry.name.to_lowercase().replace(' ', ".")
        );
        let intern = match interns.create(&entry.name, &email, &entry.referral_code) {
            Ok(intern) => intern,
            Err(err) => {
                // Unique constraints fire on re-runs; skip rows that exist.
                info!("Skipping {}: {}", entry.name, err);
                continue;
            }
        };

        // Split the sample total into four donations spread over recent
        // months so stats and trends have history to aggregate.
        let slice = entry.donations / 4.0;
        for step in 0..4 {
            let donor = SEED_DONORS[(index + step) % SEED_DONORS.len()];
            let created_at = now - month_ms * (3 - step as i64);
            interns.record_donation_at(intern.id, slice, donor, "", created_at)?;
        }
        seeded += 1;
    }

    println!(
        "Seeded {} interns and {} rewards into {}",
        seeded,
        catalog.len(),
        db_path.display()
    );
    Ok(())
}
