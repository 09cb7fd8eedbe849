/// Configuration management for the directory server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 127.0.0.1)
/// - `API_PORT`: Port to bind to (default: 5000)
/// - `API_PRODUCTION`: Enables HSTS on responses (default: false)
/// - `ROSTER_SEED_USERS`: Seed the two demo users on startup (default: true)
/// - `RUST_LOG`: Log filter (default: roster_api=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use roster_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Store configuration
    pub store: StoreConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Production mode (adds Strict-Transport-Security)
    pub production: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            production: false,
        }
    }
}

/// User store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Whether a fresh store starts with the demo users
    pub seed_users: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_users: true }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be
    /// parsed (e.g. a non-numeric port).
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let host = env::var("API_HOST").unwrap_or(defaults.api.host);

        let port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("API_PORT must be a port number, got {raw:?}"))?,
            Err(_) => defaults.api.port,
        };

        let production = env_flag("API_PRODUCTION", defaults.api.production)?;
        let seed_users = env_flag("ROSTER_SEED_USERS", defaults.store.seed_users)?;

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                production,
            },
            store: StoreConfig { seed_users },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

/// Reads a boolean environment variable, falling back to `default` when unset
fn env_flag(name: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(name) {
        Ok(raw) => parse_flag(&raw)
            .with_context(|| format!("{name} must be a boolean, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value {other:?}"),
    }
}
