//! Dashboard command implementation

use anyhow::Result;

use fundboard::config::Config;

use super::build_service;

/// Print an intern's dashboard to stdout.
pub async fn dashboard_command(config: &Config, intern_id: i64) -> Result<()> {
    let service = build_service(config)?;
    let sourced = service.dashboard(intern_id)?;
    let dashboard = sourced.value;

    println!(
        "{} <{}> (referral: {})",
        dashboard.name, dashboard.email, dashboard.referral_code
    );
    println!(
        "  Total raised: ₹{:.2} [{}]",
        dashboard.total_donations,
        sourced.source.as_str()
    );
    println!(
        "  Level: {} - next milestone ₹{:.0} ({:.1}%)",
        dashboard.progress.current_level,
        dashboard.progress.next_milestone,
        dashboard.progress.progress_percentage
    );

    println!("\n  Rewards:");
    for status in &dashboard.rewards {
        let marker = if status.unlocked { "x" } else { " " };
        println!(
            "    [{}] {} {} (₹{:.0})",
            marker, status.reward.icon, status.reward.title, status.reward.required_donations
        );
    }

    if !dashboard.recent_donations.is_empty() {
        println!("\n  Recent donations:");
        for donation in &dashboard.recent_donations {
            println!(
                "    ₹{:.2} from {}",
                donation.amount,
                donation.display_donor()
            );
        }
    }

    Ok(())
}
