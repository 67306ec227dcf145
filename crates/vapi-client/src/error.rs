//! Error types for vapi-client.

use thiserror::Error;

/// Errors that can occur when talking to the Vapi API.
#[derive(Debug, Error)]
pub enum VapiError {
    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint does not exist or the key has no access to it.
    #[error("Vapi API endpoint not found (404): {endpoint}")]
    EndpointNotFound { endpoint: String },

    /// Non-success response with the provider's error body.
    #[error("Vapi API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Missing or invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Every candidate endpoint failed.
    #[error("All endpoints failed: {}", .attempts.join("; "))]
    AllAttemptsFailed { attempts: Vec<String> },
}

impl VapiError {
    /// HTTP status returned by the provider, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            VapiError::EndpointNotFound { .. } => Some(404),
            VapiError::Api { status, .. } => Some(*status),
            VapiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
