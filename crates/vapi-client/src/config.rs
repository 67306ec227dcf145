//! Configuration types for vapi-client.

use std::env;
use std::time::Duration;

/// Default Vapi API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.vapi.ai";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the Vapi API.
#[derive(Clone)]
pub struct VapiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Private (server-side) API key. Empty means unconfigured.
    pub api_key: String,
    /// Public key handed to browser clients. Never used for server calls.
    pub public_key: Option<String>,
    /// Assistant used when a session request names none.
    pub assistant_id: Option<String>,
    /// Outbound phone number. When set, sessions are phone calls.
    pub phone_number_id: Option<String>,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for VapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            public_key: None,
            assistant_id: None,
            phone_number_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for VapiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VapiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("public_key", &self.public_key.as_ref().map(|_| "***"))
            .field("assistant_id", &self.assistant_id)
            .field("phone_number_id", &self.phone_number_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VapiConfig {
    /// Create configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRIVATE_API_KEY` - Server-side API key (default: unset)
    /// - `PUBLIC_API_KEY` - Browser-side key (default: unset)
    /// - `VAPI_ASSISTANT_ID` - Default assistant (default: unset)
    /// - `VAPI_BASE_URL` - API URL (default: https://api.vapi.ai)
    /// - `VAPI_PHONE_NUMBER_ID` - Outbound phone number (default: unset)
    /// - `API_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = non_empty_var("VAPI_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = non_empty_var("API_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            base_url,
            api_key: non_empty_var("PRIVATE_API_KEY").unwrap_or_default(),
            public_key: non_empty_var("PUBLIC_API_KEY"),
            assistant_id: non_empty_var("VAPI_ASSISTANT_ID"),
            phone_number_id: non_empty_var("VAPI_PHONE_NUMBER_ID"),
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> VapiConfigBuilder {
        VapiConfigBuilder::default()
    }

    /// Whether a private API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full URL for an endpoint path such as `/call`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Trimmed value of an environment variable, if set and not blank.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Builder for VapiConfig.
#[derive(Debug, Default)]
pub struct VapiConfigBuilder {
    config: VapiConfig,
}

impl VapiConfigBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the private API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into().trim().to_string();
        self
    }

    /// Set the public key.
    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.config.public_key = non_empty(key);
        self
    }

    /// Set the default assistant id.
    pub fn assistant_id(mut self, id: impl Into<String>) -> Self {
        self.config.assistant_id = non_empty(id);
        self
    }

    /// Set the outbound phone number id.
    pub fn phone_number_id(mut self, id: impl Into<String>) -> Self {
        self.config.phone_number_id = non_empty(id);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VapiConfig {
        self.config
    }
}
