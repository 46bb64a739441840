//! Repository implementations for donation data access

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tracing::debug;

use super::DonationDb;
use super::time_bucket::{current_month_bucket, last_n_month_buckets, month_bucket, month_label};
use crate::domain::{Donation, Intern, InternStats, MonthWindow, TrendPoint, TrendValue};
use crate::leaderboard::LeaderboardEntry;
use crate::rewards::RewardDefinition;

/// Repository for intern and donation CRUD
pub struct InternRepository {
    db: DonationDb,
}

impl InternRepository {
    pub fn new(db: DonationDb) -> Self {
        Self { db }
    }

    /// Create a new intern with a zero donation total.
    pub fn create(&self, name: &str, email: &str, referral_code: &str) -> Result<Intern> {
        let now = Utc::now().timestamp_millis();
        let conn = self.db.conn();
        conn.execute(
            r#"
            INSERT INTO interns (name, email, referral_code, total_donations, created_at)
            VALUES (?1, ?2, ?3, 0.0, ?4)
            "#,
            params![name, email, referral_code, now],
        )
        .context("Failed to create intern")?;

        let id = conn.last_insert_rowid();
        debug!("Created intern #{} ({})", id, name);

        Ok(Intern {
            id,
            name: name.to_string(),
            email: email.to_string(),
            referral_code: referral_code.to_string(),
            total_donations: 0.0,
            created_at: now,
        })
    }

    /// Get an intern by id.
    pub fn get(&self, id: i64) -> Result<Option<Intern>> {
        let conn = self.db.conn();
        conn.query_row(
            r#"
            SELECT id, name, email, referral_code, total_donations, created_at
            FROM interns WHERE id = ?1
            "#,
            params![id],
            |row| {
                Ok(Intern {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    referral_code: row.get(3)?,
                    total_donations: row.get(4)?,
                    created_at: row.get(5)?,
                })
            },
        )
        .optional()
        .context("Failed to load intern")
    }

    /// Record a donation and bump the intern's running total in one
    /// transaction.
    pub fn record_donation(
        &self,
        intern_id: i64,
        amount: f64,
        donor_name: &str,
        donor_email: &str,
    ) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        self.record_donation_at(intern_id, amount, donor_name, donor_email, now)
    }

    /// Record a donation with an explicit timestamp (used by `seed` and
    /// tests to build history).
    pub fn record_donation_at(
        &self,
        intern_id: i64,
        amount: f64,
        donor_name: &str,
        donor_email: &str,
        created_at: i64,
    ) -> Result<()> {
        let bucket = month_bucket(created_at);
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO donations (intern_id, amount, donor_name, donor_email, created_at, month_bucket)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![intern_id, amount, donor_name, donor_email, created_at, bucket],
        )?;
        tx.execute(
            "UPDATE interns SET total_donations = total_donations + ?1 WHERE id = ?2",
            params![amount, intern_id],
        )?;
        tx.commit().context("Failed to record donation")?;
        Ok(())
    }

    /// Most recent donations for an intern, newest first.
    pub fn recent_donations(&self, intern_id: i64, limit: usize) -> Result<Vec<Donation>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            r#"
            SELECT intern_id, amount, donor_name, donor_email, created_at
            FROM donations WHERE intern_id = ?1
            ORDER BY created_at DESC LIMIT ?2
            "#,
        )?;

        let donations = stmt
            .query_map(params![intern_id, limit], |row| {
                Ok(Donation {
                    intern_id: row.get(0)?,
                    amount: row.get(1)?,
                    donor_name: row.get(2)?,
                    donor_email: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(donations)
    }

    /// All interns as unranked leaderboard entries.
    pub fn leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT name, total_donations, referral_code FROM interns ORDER BY id",
        )?;

        let entries = stmt
            .query_map([], |row| {
                Ok(LeaderboardEntry {
                    name: row.get(0)?,
                    donations: row.get(1)?,
                    referral_code: row.get(2)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(entries)
    }

    /// Aggregate statistics for an intern, or None if the intern is
    /// unknown.
    pub fn stats(&self, intern_id: i64) -> Result<Option<InternStats>> {
        let Some(intern) = self.get(intern_id)? else {
            return Ok(None);
        };

        let now = Utc::now().timestamp_millis();
        let conn = self.db.conn();

        let (total_donors, average_donation): (u64, f64) = conn.query_row(
            r#"
            SELECT COUNT(DISTINCT COALESCE(NULLIF(TRIM(donor_name), ''), 'Anonymous')),
                   COALESCE(AVG(amount), 0.0)
            FROM donations WHERE intern_id = ?1
            "#,
            params![intern_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let this_bucket = current_month_bucket();
        let (month_donations, month_donors): (f64, u64) = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0.0),
                   COUNT(DISTINCT COALESCE(NULLIF(TRIM(donor_name), ''), 'Anonymous'))
            FROM donations WHERE intern_id = ?1 AND month_bucket = ?2
            "#,
            params![intern_id, this_bucket],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let buckets = last_n_month_buckets(now, 6);
        let previous_bucket = &buckets[buckets.len() - 2];
        let previous_donations: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM donations WHERE intern_id = ?1 AND month_bucket = ?2",
            params![intern_id, previous_bucket],
            |row| row.get(0),
        )?;

        let growth = TrendValue {
            current: month_donations,
            previous: previous_donations,
        }
        .percent_change();

        let mut stmt = conn.prepare(
            r#"
            SELECT month_bucket, SUM(amount) FROM donations
            WHERE intern_id = ?1 AND month_bucket >= ?2
            GROUP BY month_bucket
            "#,
        )?;
        let sums: Vec<(String, f64)> = stmt
            .query_map(params![intern_id, buckets[0]], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .filter_map(|r| r.ok())
            .collect();

        let donation_trend = buckets
            .iter()
            .map(|bucket| TrendPoint {
                month: month_label(bucket),
                amount: sums
                    .iter()
                    .find(|(b, _)| b == bucket)
                    .map(|(_, amount)| *amount)
                    .unwrap_or(0.0),
            })
            .collect();

        Ok(Some(InternStats {
            total_donations: intern.total_donations,
            total_donors,
            average_donation,
            this_month: MonthWindow {
                donations: month_donations,
                donors: month_donors,
                growth,
            },
            donation_trend,
        }))
    }
}

/// Repository for the persisted reward catalog
pub struct RewardRepository {
    db: DonationDb,
}

impl RewardRepository {
    pub fn new(db: DonationDb) -> Self {
        Self { db }
    }

    /// Replace the stored catalog with the given definitions.
    pub fn replace_catalog(&self, catalog: &[RewardDefinition]) -> Result<()> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM rewards", [])?;
        for reward in catalog {
            tx.execute(
                r#"
                INSERT INTO rewards (id, title, description, required_donations, icon)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    reward.id,
                    reward.title,
                    reward.description,
                    reward.required_donations,
                    reward.icon
                ],
            )?;
        }
        tx.commit().context("Failed to replace reward catalog")?;
        Ok(())
    }

    /// The stored catalog in threshold order (empty if never seeded).
    pub fn catalog(&self) -> Result<Vec<RewardDefinition>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, description, required_donations, icon
            FROM rewards ORDER BY required_donations
            "#,
        )?;

        let rewards = stmt
            .query_map([], |row| {
                Ok(RewardDefinition {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    required_donations: row.get(3)?,
                    icon: row.get(4)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(rewards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::default_catalog;
    use tempfile::tempdir;

    fn open_repo() -> (tempfile::TempDir, InternRepository) {
        let dir = tempdir().unwrap();
        let db = DonationDb::open(&dir.path().join("test.db")).unwrap();
        (dir, InternRepository::new(db))
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, repo) = open_repo();
        let created = repo.create("Alice Smith", "alice@example.com", "alice2025").unwrap();
        let loaded = repo.get(created.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Alice Smith");
        assert_eq!(loaded.total_donations, 0.0);
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, repo) = open_repo();
        assert!(repo.get(404).unwrap().is_none());
    }

    #[test]
    fn test_record_donation_bumps_total() {
        let (_dir, repo) = open_repo();
        let intern = repo.create("Bob Jones", "bob@example.com", "bob2025").unwrap();
        repo.record_donation(intern.id, 500.0, "John Doe", "").unwrap();
        repo.record_donation(intern.id, 250.0, "", "").unwrap();

        let loaded = repo.get(intern.id).unwrap().unwrap();
        assert_eq!(loaded.total_donations, 750.0);

        let recent = repo.recent_donations(intern.id, 5).unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_recent_donations_newest_first() {
        let (_dir, repo) = open_repo();
        let intern = repo.create("Eve Wilson", "eve@example.com", "eve2025").unwrap();
        repo.record_donation_at(intern.id, 100.0, "Old", "", 1_000).unwrap();
        repo.record_donation_at(intern.id, 200.0, "New", "", 2_000).unwrap();

        let recent = repo.recent_donations(intern.id, 5).unwrap();
        assert_eq!(recent[0].donor_name, "New");
        assert_eq!(recent[1].donor_name, "Old");
    }

    #[test]
    fn test_leaderboard_entries_in_insert_order() {
        let (_dir, repo) = open_repo();
        repo.create("Alice Smith", "alice@example.com", "alice2025").unwrap();
        repo.create("Bob Jones", "bob@example.com", "bob2025").unwrap();

        let entries = repo.leaderboard_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Alice Smith");
    }

    #[test]
    fn test_stats_counts_anonymous_as_one_donor() {
        let (_dir, repo) = open_repo();
        let intern = repo.create("Grace Lee", "grace@example.com", "grace2025").unwrap();
        repo.record_donation(intern.id, 100.0, "", "").unwrap();
        repo.record_donation(intern.id, 200.0, " ", "").unwrap();
        repo.record_donation(intern.id, 300.0, "John Doe", "").unwrap();

        let stats = repo.stats(intern.id).unwrap().unwrap();
        assert_eq!(stats.total_donors, 2);
        assert_eq!(stats.total_donations, 600.0);
        assert!((stats.average_donation - 200.0).abs() < 1e-9);
        assert_eq!(stats.donation_trend.len(), 6);
    }

    #[test]
    fn test_stats_missing_intern_is_none() {
        let (_dir, repo) = open_repo();
        assert!(repo.stats(99).unwrap().is_none());
    }

    #[test]
    fn test_reward_catalog_roundtrip() {
        let dir = tempdir().unwrap();
        let db = DonationDb::open(&dir.path().join("test.db")).unwrap();
        let repo = RewardRepository::new(db);

        assert!(repo.catalog().unwrap().is_empty());
        repo.replace_catalog(&default_catalog()).unwrap();
        let stored = repo.catalog().unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[3].title, "Legend");
    }
}
