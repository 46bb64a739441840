//! Fundboard - intern fundraising dashboard backend
//!
//! Fundboard serves the data behind an intern fundraising dashboard: donation
//! progress (tier, next milestone, percentage), reward unlocks, recent
//! donations, a ranked leaderboard, and per-intern statistics.
//!
//! ## Data flow
//!
//! Donation data lives in SQLite (`~/.fundboard/fundboard.db`). All reads go
//! through the [`provider::DonationSource`] trait; when the store is
//! unavailable or an intern is unknown, the service layer substitutes
//! deterministic demo data and reports that provenance to the caller instead
//! of failing the request.

pub mod config;
pub mod domain;
pub mod leaderboard;
pub mod progress;
pub mod provider;
pub mod rewards;
pub mod server;
pub mod service;
pub mod store;

pub use domain::*;
