//! SQLite storage for interns, donations, and the reward catalog
//!
//! Manages the `~/.fundboard/fundboard.db` database with automatic schema
//! migration.

mod repository;
mod source;
mod time_bucket;

pub use repository::{InternRepository, RewardRepository};
pub use source::SqliteSource;
pub use time_bucket::{current_month_bucket, last_n_month_buckets, month_bucket, month_label};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

/// Database wrapper shared between repositories
#[derive(Clone)]
pub struct DonationDb {
    conn: Arc<Mutex<Connection>>,
}

impl DonationDb {
    /// Default database location (~/.fundboard/fundboard.db)
    pub fn default_path() -> PathBuf {
        Config::global_data_dir().join("fundboard.db")
    }

    /// Open or create the database at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path())
    }

    /// Open or create the database at a specific path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open donation db: {}", path.display()))?;

        // WAL so the serve loop and CLI commands can share the file
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection (for queries)
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Donation DB lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn();

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        // Migration 2: month buckets on donations for trend queries
        if version < 2 {
            let has_month_bucket: bool = conn
                .prepare("SELECT COUNT(*) FROM pragma_table_info('donations') WHERE name = 'month_bucket'")
                .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                .map(|c| c > 0)
                .unwrap_or(false);

            if !has_month_bucket {
                conn.execute_batch(
                    r#"
                    ALTER TABLE donations ADD COLUMN month_bucket TEXT NOT NULL DEFAULT '';
                    CREATE INDEX IF NOT EXISTS idx_donation_month ON donations(month_bucket);
                    "#,
                )?;
            }

            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        Ok(())
    }

    /// Delete all data (interns, donations, rewards).
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM donations;
            DELETE FROM interns;
            DELETE FROM rewards;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the donation database
const SCHEMA_SQL: &str = r#"
-- Fundraising interns (one row per participant)
CREATE TABLE IF NOT EXISTS interns (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    referral_code TEXT NOT NULL UNIQUE,
    total_donations REAL NOT NULL DEFAULT 0.0,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_intern_totals ON interns(total_donations);

-- Individual donations attributed to an intern
CREATE TABLE IF NOT EXISTS donations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    intern_id INTEGER NOT NULL REFERENCES interns(id) ON DELETE CASCADE,
    amount REAL NOT NULL,
    donor_name TEXT NOT NULL DEFAULT '',
    donor_email TEXT NOT NULL DEFAULT '',
    created_at INTEGER NOT NULL,
    month_bucket TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_donation_intern ON donations(intern_id);
CREATE INDEX IF NOT EXISTS idx_donation_month ON donations(month_bucket);

-- Reward catalog (empty means: use the built-in defaults)
CREATE TABLE IF NOT EXISTS rewards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    required_donations REAL NOT NULL,
    icon TEXT NOT NULL DEFAULT '🏆'
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (2);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test_fundboard.db");
        let db = DonationDb::open(&db_path).unwrap();

        let conn = db.conn();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"interns".to_string()));
        assert!(tables.contains(&"donations".to_string()));
        assert!(tables.contains(&"rewards".to_string()));
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test_fundboard.db");
        drop(DonationDb::open(&db_path).unwrap());
        // Second open must run migrations without complaint.
        let db = DonationDb::open(&db_path).unwrap();
        let version: i32 = db
            .conn()
            .query_row("SELECT MAX(version) FROM schema_version", [], |r| r.get(0))
            .unwrap();
        assert_eq!(version, 2);
    }
}
