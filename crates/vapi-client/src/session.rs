//! Voice call sessions with demo and mock fallbacks.

use reqwest::Method;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::attempt::first_success;
use crate::client::VapiClient;
use crate::error::VapiError;
use crate::types::{SessionStatus, StatusOutcome, StopOutcome, VoiceSession};
use crate::validation::is_uuid;

const MOCK_NOTE: &str = "Mock session - Vapi API not configured";
const DEMO_NOTE: &str = "Demo mode - Configure VAPI_PHONE_NUMBER_ID in .env for real calls";

/// Starts, stops and queries voice call sessions.
///
/// None of the operations fail. Missing configuration yields a `mock`
/// session, a provider that refuses web calls yields a `demo` session and
/// anything else yields an `error` session with the reason in its note.
#[derive(Debug, Clone)]
pub struct VoiceSessions {
    client: VapiClient,
}

impl VoiceSessions {
    pub fn new(client: VapiClient) -> Self {
        Self { client }
    }

    /// Get the underlying client.
    pub fn client(&self) -> &VapiClient {
        &self.client
    }

    /// Start a call with the assistant named by `voice_id`, or the default.
    ///
    /// `voice_id` is only used when it is a UUID. `language` is accepted for
    /// callers but the assistant's own configuration decides the language.
    pub async fn start(&self, language: Option<&str>, voice_id: Option<&str>) -> VoiceSession {
        if !self.client.is_configured() {
            warn!("PRIVATE_API_KEY is not set - returning mock session");
            return VoiceSession {
                id: format!("mock-{}", Uuid::new_v4()),
                status: SessionStatus::Mock,
                websocket_url: None,
                note: Some(MOCK_NOTE.to_string()),
            };
        }

        let assistant_id = match self.resolve_assistant(voice_id) {
            Ok(id) => id,
            Err(reason) => {
                error!("Error starting voice session: {}", reason);
                return error_session(format!("Failed to start session: {}", reason));
            }
        };

        info!(
            assistant = %assistant_id,
            language = language.unwrap_or("default"),
            "Creating Vapi call"
        );

        let (endpoint, body) = match self.client.config().phone_number_id {
            Some(ref phone) => (
                "/call/phone",
                json!({ "assistantId": assistant_id, "phoneNumberId": phone }),
            ),
            None => ("/call", json!({ "assistantId": assistant_id })),
        };

        match self.client.request(Method::POST, endpoint, Some(&body)).await {
            Ok(response) => {
                let session = VoiceSession::from_provider(&response);
                info!(id = %session.id, status = %session.status, "Vapi call created");
                session
            }
            Err(e) if needs_phone_number(&e) => {
                warn!("Phone number not configured - returning demo session");
                VoiceSession {
                    id: format!("demo-{}", Uuid::new_v4()),
                    status: SessionStatus::Demo,
                    websocket_url: None,
                    note: Some(DEMO_NOTE.to_string()),
                }
            }
            Err(e) => {
                error!("Error starting voice session: {}", e);
                error_session(format!("Failed to start session: {}", e))
            }
        }
    }

    /// End a session.
    pub async fn stop(&self, session_id: &str) -> StopOutcome {
        if self.short_circuits(session_id) {
            return StopOutcome {
                session_id: session_id.to_string(),
                status: SessionStatus::Stopped,
                message: "Session stopped (demo mode)".to_string(),
            };
        }

        let id = urlencoding::encode(session_id);
        let candidates = vec![
            format!("/call/{}/end", id),
            format!("/v1/call/{}/end", id),
            format!("/call/phone/{}/end", id),
        ];
        let client = &self.client;
        let body = json!({});
        let body = &body;

        match first_success(&candidates, move |endpoint| async move {
            client.request(Method::POST, &endpoint, Some(body)).await
        })
        .await
        {
            Ok((endpoint, response)) => {
                info!(session = %session_id, endpoint = %endpoint, "Vapi call ended");
                StopOutcome {
                    session_id: session_id.to_string(),
                    status: provider_status(&response).unwrap_or(SessionStatus::Ended),
                    message: "Session stopped successfully".to_string(),
                }
            }
            Err(e) => {
                warn!("Could not stop call via API: {}", e);
                StopOutcome {
                    session_id: session_id.to_string(),
                    status: SessionStatus::Stopped,
                    message: "Session stopped (endpoint not available)".to_string(),
                }
            }
        }
    }

    /// Query a session's status and duration.
    pub async fn status(&self, session_id: &str) -> StatusOutcome {
        if self.short_circuits(session_id) {
            return StatusOutcome {
                session_id: session_id.to_string(),
                status: SessionStatus::Demo,
                duration_seconds: 0.0,
                note: Some("Demo mode - Configure VAPI_PHONE_NUMBER_ID for real calls".to_string()),
            };
        }

        let id = urlencoding::encode(session_id);
        let candidates = vec![
            format!("/call/{}", id),
            format!("/v1/call/{}", id),
            format!("/call/phone/{}", id),
        ];
        let client = &self.client;

        match first_success(&candidates, move |endpoint| async move {
            client.request(Method::GET, &endpoint, None).await
        })
        .await
        {
            Ok((_, response)) => StatusOutcome {
                session_id: session_id.to_string(),
                status: provider_status(&response).unwrap_or(SessionStatus::Unknown),
                duration_seconds: ["durationSeconds", "duration_seconds"]
                    .iter()
                    .find_map(|key| response.get(*key).and_then(Value::as_f64))
                    .unwrap_or(0.0),
                note: None,
            },
            Err(e) => {
                warn!("Could not get call status via API: {}", e);
                StatusOutcome {
                    session_id: session_id.to_string(),
                    status: SessionStatus::Active,
                    duration_seconds: 0.0,
                    note: Some("Status unavailable - endpoint not found".to_string()),
                }
            }
        }
    }

    fn resolve_assistant(&self, voice_id: Option<&str>) -> Result<String, String> {
        let requested = voice_id.map(str::trim).filter(|v| is_uuid(v));

        let assistant_id = match requested {
            Some(id) => id.to_string(),
            None => match self.client.config().assistant_id {
                Some(ref id) => id.trim().to_string(),
                None => {
                    return Err(
                        "No assistant ID configured. Please set VAPI_ASSISTANT_ID in your .env file."
                            .to_string(),
                    )
                }
            },
        };

        if !is_uuid(&assistant_id) {
            return Err(format!(
                "Invalid assistant ID format: {}. It must be a valid UUID.",
                assistant_id
            ));
        }
        Ok(assistant_id)
    }

    /// Demo sessions and an unconfigured client never reach the network.
    fn short_circuits(&self, session_id: &str) -> bool {
        session_id.to_lowercase().contains("demo") || !self.client.is_configured()
    }
}

fn needs_phone_number(err: &VapiError) -> bool {
    err.to_string().contains("phoneNumber")
}

fn error_session(note: String) -> VoiceSession {
    VoiceSession {
        id: Uuid::new_v4().to_string(),
        status: SessionStatus::Error,
        websocket_url: None,
        note: Some(note),
    }
}

fn provider_status(response: &Value) -> Option<SessionStatus> {
    response
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(SessionStatus::from)
}
