//! CLI command implementations

pub mod dashboard;
pub mod init;
pub mod leaderboard;
pub mod seed;
pub mod serve;

use anyhow::Result;

use fundboard::config::Config;
use fundboard::provider::DemoDataSource;
use fundboard::service::DashboardService;
use fundboard::store::{DonationDb, SqliteSource};

/// Build the dashboard service from config: SQLite store with the demo
/// generator as fallback.
pub fn build_service(config: &Config) -> Result<DashboardService<SqliteSource>> {
    let db = DonationDb::open(&config.db_path())?;
    let source = SqliteSource::new(db);

    let fallback = match config.data.demo_seed {
        Some(seed) => DemoDataSource::new(seed),
        None => DemoDataSource::from_entropy(),
    };

    let mut service = DashboardService::new(source, fallback);
    if let Some(catalog) = config.reward_catalog() {
        service = service.with_catalog(catalog);
    }
    Ok(service)
}
