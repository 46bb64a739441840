use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use fundboard::config::Config;

#[derive(Parser)]
#[command(name = "fundboard")]
#[command(about = "Backend for an intern fundraising dashboard")]
#[command(version)]
struct Cli {
    /// Path to the working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to fundboard.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard API server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print an intern's dashboard
    Dashboard {
        /// Intern id
        id: i64,
    },

    /// Print the ranked leaderboard
    Leaderboard,

    /// Create the database and load the sample dataset
    Seed {
        /// Wipe existing data first
        #[arg(long)]
        reset: bool,
    },

    /// Initialize a new fundboard.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_dir(&work_dir)?,
    };

    match cli.command {
        Some(Commands::Serve { port }) => {
            cli::serve::serve_command(&config, port).await?;
        }
        Some(Commands::Dashboard { id }) => {
            cli::dashboard::dashboard_command(&config, id).await?;
        }
        Some(Commands::Leaderboard) => {
            cli::leaderboard::leaderboard_command(&config).await?;
        }
        Some(Commands::Seed { reset }) => {
            cli::seed::seed_command(&config, reset).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, force).await?;
        }
        None => {
            // Default: run the server
            cli::serve::serve_command(&config, None).await?;
        }
    }

    Ok(())
}
