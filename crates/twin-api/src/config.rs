//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use gemini_brain::GeminiBrainConfig;
use vapi_client::VapiConfig;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Default SQLite database URL.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:digital_twin.db?mode=rwc";

/// Default browser origin allowed by CORS.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Frontend origin allowed by CORS.
    pub frontend_url: String,
    /// Text chat provider settings.
    pub gemini: GeminiBrainConfig,
    /// Voice platform settings.
    pub vapi: VapiConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TWIN_API_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:digital_twin.db?mode=rwc` |
    /// | `FRONTEND_URL` | Browser origin allowed by CORS | `http://localhost:3000` |
    ///
    /// Provider keys are read by [`GeminiBrainConfig::from_env`] and
    /// [`VapiConfig::from_env`]. None of them are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("TWIN_API_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let frontend_url = env::var("FRONTEND_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        Ok(Self {
            addr,
            database_url,
            frontend_url,
            gemini: GeminiBrainConfig::from_env(),
            vapi: VapiConfig::from_env(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TWIN_API_ADDR format")]
    InvalidAddr,
}
