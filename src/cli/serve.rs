//! Serve command implementation

use anyhow::Result;
use tracing::info;

use fundboard::config::Config;
use fundboard::server;

use super::build_service;

/// Run the dashboard API server in the foreground.
pub async fn serve_command(config: &Config, port_override: Option<u16>) -> Result<()> {
    let service = build_service(config)?;
    let port = port_override.unwrap_or(config.server.port);
    let token = config.server.auth_token().map(|t| t.to_string());

    info!("Starting fundboard API on port {}", port);
    server::run_server(service, port, token)
}
