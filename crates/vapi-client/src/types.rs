//! Normalized session and cloning types.
//!
//! The provider is inconsistent about field names (`id` vs `callId`,
//! `websocketUrl` vs `websocket_url`, ...). Everything is normalized into
//! these types at the client boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a voice session.
///
/// Statuses the provider reports outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Active,
    Queued,
    Demo,
    Mock,
    Error,
    Stopped,
    Ended,
    Unknown,
    Other(String),
}

impl SessionStatus {
    /// Lowercase wire name of the status.
    pub fn as_str(&self) -> &str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Queued => "queued",
            SessionStatus::Demo => "demo",
            SessionStatus::Mock => "mock",
            SessionStatus::Error => "error",
            SessionStatus::Stopped => "stopped",
            SessionStatus::Ended => "ended",
            SessionStatus::Unknown => "unknown",
            SessionStatus::Other(s) => s,
        }
    }
}

impl From<&str> for SessionStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => SessionStatus::Active,
            "queued" => SessionStatus::Queued,
            "demo" => SessionStatus::Demo,
            "mock" => SessionStatus::Mock,
            "error" => SessionStatus::Error,
            "stopped" => SessionStatus::Stopped,
            "ended" => SessionStatus::Ended,
            "unknown" => SessionStatus::Unknown,
            _ => SessionStatus::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for SessionStatus {
    fn from(s: String) -> Self {
        SessionStatus::from(s.as_str())
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A voice session, real or locally fabricated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSession {
    /// Provider call id, or a `mock-`/`demo-` prefixed local id.
    pub id: String,
    pub status: SessionStatus,
    /// Realtime audio endpoint, when the provider returned one.
    pub websocket_url: Option<String>,
    /// Why a session is not a live call.
    pub note: Option<String>,
}

impl VoiceSession {
    /// Normalize a call creation response.
    pub fn from_provider(value: &Value) -> Self {
        Self {
            id: first_string(value, &["id", "callId", "call_id"]).unwrap_or_default(),
            status: first_string(value, &["status"])
                .map(SessionStatus::from)
                .unwrap_or(SessionStatus::Queued),
            websocket_url: first_string(value, &["websocketUrl", "websocket_url", "websocketURL"]),
            note: None,
        }
    }

    /// Whether the session is a live provider call.
    pub fn is_live(&self) -> bool {
        !matches!(
            self.status,
            SessionStatus::Demo | SessionStatus::Mock | SessionStatus::Error
        )
    }
}

/// Result of stopping a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOutcome {
    pub session_id: String,
    pub status: SessionStatus,
    pub message: String,
}

/// Result of querying a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusOutcome {
    pub session_id: String,
    pub status: SessionStatus,
    pub duration_seconds: f64,
    pub note: Option<String>,
}

/// An uploaded voice sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedSample {
    pub voice_sample_id: String,
    pub status: String,
    pub filename: String,
}

impl UploadedSample {
    pub fn from_provider(value: &Value, filename: &str) -> Self {
        Self {
            voice_sample_id: first_string(value, &["id", "voice_sample_id"]).unwrap_or_default(),
            status: first_string(value, &["status"]).unwrap_or_else(|| "uploaded".to_string()),
            filename: filename.to_string(),
        }
    }
}

/// A voice clone that was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedClone {
    pub clone_id: String,
    pub status: String,
    pub estimated_time_seconds: Option<u64>,
}

impl CreatedClone {
    pub fn from_provider(value: &Value) -> Self {
        Self {
            clone_id: first_string(value, &["id", "clone_id"]).unwrap_or_default(),
            status: first_string(value, &["status"]).unwrap_or_else(|| "processing".to_string()),
            estimated_time_seconds: value
                .get("estimated_time_seconds")
                .and_then(Value::as_u64),
        }
    }
}

/// Processing state of a voice clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneStatus {
    pub clone_id: String,
    pub status: String,
    pub progress_percent: Option<f64>,
    pub error: Option<String>,
}

impl CloneStatus {
    pub fn from_provider(value: &Value, clone_id: &str) -> Self {
        Self {
            clone_id: clone_id.to_string(),
            status: first_string(value, &["status"]).unwrap_or_else(|| "unknown".to_string()),
            progress_percent: first_number(value, &["progress_percent"]),
            error: first_string(value, &["error"]),
        }
    }
}

/// Synthesized preview audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoicePreview {
    pub audio_url: String,
    pub duration_seconds: f64,
}

impl VoicePreview {
    pub fn from_provider(value: &Value) -> Self {
        Self {
            audio_url: first_string(value, &["audio_url"]).unwrap_or_default(),
            duration_seconds: first_number(value, &["duration_seconds"]).unwrap_or(0.0),
        }
    }
}

/// First non-empty string among `keys`.
pub(crate) fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First numeric value among `keys`.
pub(crate) fn first_number(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_f64))
}
