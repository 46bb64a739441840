//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

/// Default configuration content for fundboard init
pub const DEFAULT_CONFIG: &str = r#"# Fundboard Configuration
# =======================
#
# The dashboard reads donation data from SQLite and falls back to
# deterministic demo data when the store is unavailable. Responses always
# report which one they came from.

# ============================================================================
# SERVER - Local HTTP API
# ============================================================================
#
# Available options:
#   port  - Port for the local API server (default: 8642)
#   token - Shared secret for API requests (sent as `X-Fundboard-Token`)
#           Leave empty to disable auth (recommended for local development)

[server]
port = 8642
token = ""

# ============================================================================
# DATA - Storage and demo generation
# ============================================================================
#
# Available options:
#   db_path   - Database file path (default: ~/.fundboard/fundboard.db)
#   demo_seed - Fixed seed for the demo-data generator; unset means a fresh
#               random seed per process. Set it to make demo dashboards
#               reproducible.

[data]
# db_path = "/var/lib/fundboard/fundboard.db"
# demo_seed = 42

# ============================================================================
# REWARDS - Catalog override
# ============================================================================
#
# Uncomment to replace the built-in catalog (First Donation / Rising Star /
# Champion / Legend). Entries need: id, title, description,
# required_donations, icon.

# [[reward]]
# id = 1
# title = "First Donation"
# description = "Complete your first donation"
# required_donations = 100.0
# icon = "🎯"
"#;

/// Write a default fundboard.toml into the working directory.
pub async fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_path = work_dir.join("fundboard.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    info!("Created config file: {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
