//! Server and data settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port for the local API server
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional shared secret for API requests (sent as `X-Fundboard-Token`).
    /// Leave empty to disable auth (recommended for local development).
    #[serde(default)]
    pub token: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            token: String::new(),
        }
    }
}

fn default_port() -> u16 {
    8642
}

impl ServerSettings {
    /// The auth token, or None when auth is disabled.
    pub fn auth_token(&self) -> Option<&str> {
        let trimmed = self.token.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

/// Data source settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataSettings {
    /// Database file path (defaults to ~/.fundboard/fundboard.db)
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Fixed seed for the demo-data generator. Unset means a fresh random
    /// seed per process.
    #[serde(default)]
    pub demo_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_empty_disables_auth() {
        let settings = ServerSettings::default();
        assert!(settings.auth_token().is_none());

        let settings = ServerSettings {
            token: "  ".to_string(),
            ..Default::default()
        };
        assert!(settings.auth_token().is_none());
    }

    #[test]
    fn test_auth_token_trimmed() {
        let settings = ServerSettings {
            token: " secret ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.auth_token(), Some("secret"));
    }
}
