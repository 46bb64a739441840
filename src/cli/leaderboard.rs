//! Leaderboard command implementation

use anyhow::Result;

use fundboard::config::Config;

use super::build_service;

/// Print the ranked leaderboard to stdout.
pub async fn leaderboard_command(config: &Config) -> Result<()> {
    let service = build_service(config)?;
    let sourced = service.leaderboard()?;
    let board = sourced.value;

    if board.entries.is_empty() {
        println!("No participants yet.");
        return Ok(());
    }

    println!(
        "Leaderboard ({} participants) [{}]:\n",
        board.total_participants,
        sourced.source.as_str()
    );

    for row in &board.entries {
        println!(
            "  {:>2}. {} {} - ₹{:.2} ({})",
            row.rank,
            row.badge.icon(),
            row.entry.name,
            row.entry.donations,
            row.entry.referral_code
        );
    }

    Ok(())
}
