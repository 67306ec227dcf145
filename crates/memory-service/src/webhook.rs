//! Call-completion webhook ingestion.
//!
//! The voice platform posts an event when a call ends. Its structured
//! outputs may carry a call summary and a memory candidate, which are
//! stored under a shared system user. Ingestion never fails: step errors
//! are logged and skipped, and the outcome is reported as a payload.

use database::validation::validate_assistant_id;
use database::{memory, user};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::service::MemoryService;

/// Name of the system user that owns webhook memories.
pub const WEBHOOK_USER_NAME: &str = "Webhook User";

/// Email of the system user that owns webhook memories.
pub const WEBHOOK_USER_EMAIL: &str = "webhook@system";

/// Assistant recorded when the event names none.
const UNKNOWN_ASSISTANT: &str = "unknown";

/// Minimum trimmed length for a field to be stored.
const MIN_MEANINGFUL_CHARS: usize = 10;

/// A webhook event from the voice platform.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallEvent {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub call: CallData,
}

/// The call an event refers to.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallData {
    #[serde(default)]
    pub assistant_id: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub analysis: CallAnalysis,
}

/// Post-call analysis.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallAnalysis {
    #[serde(default)]
    pub structured_outputs: StructuredOutputs,
}

/// Structured outputs extracted by the platform.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredOutputs {
    #[serde(default)]
    pub call_summary: Option<String>,
    #[serde(default)]
    pub memory_candidate: Option<String>,
}

/// What a webhook call stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedItems {
    Items(Vec<String>),
    Note(String),
}

/// Payload returned to the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookOutcome {
    /// "success" or "error"
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<SavedItems>,
}

impl WebhookOutcome {
    fn processed(items: Vec<String>) -> Self {
        let saved = if items.is_empty() {
            SavedItems::Note(
                "No data to save (webhook payload might need user_id)".to_string(),
            )
        } else {
            SavedItems::Items(items)
        };
        Self {
            status: "success".to_string(),
            message: "Webhook processed".to_string(),
            saved: Some(saved),
        }
    }

    /// Outcome for an event that could not be processed at all.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("Error processing webhook: {}", reason),
            saved: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Whether a text field carries enough content to store.
pub fn is_meaningful(text: Option<&str>) -> bool {
    text.map(|t| t.trim().chars().count() >= MIN_MEANINGFUL_CHARS)
        .unwrap_or(false)
}

impl MemoryService {
    /// Store the summary and memory candidate of a finished call.
    pub async fn ingest_call_event(&self, event: &CallEvent) -> WebhookOutcome {
        info!(
            "Received Vapi webhook: {}",
            event.event_type.as_deref().unwrap_or("unknown")
        );

        let pool = self.database().pool();
        let call = &event.call;
        let assistant_id = match call.assistant_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => match validate_assistant_id(id) {
                Ok(()) => id,
                Err(e) => {
                    warn!("Webhook assistant id rejected ({}); storing as {}", e, UNKNOWN_ASSISTANT);
                    UNKNOWN_ASSISTANT
                }
            },
            _ => UNKNOWN_ASSISTANT,
        };
        let transcript = call.transcript.as_deref().unwrap_or_default();
        let outputs = &call.analysis.structured_outputs;

        let system_user =
            match user::get_or_create_user(pool, WEBHOOK_USER_NAME, WEBHOOK_USER_EMAIL).await {
                Ok(u) => u,
                Err(e) => {
                    error!("Error resolving webhook user: {}", e);
                    return WebhookOutcome::failed(e);
                }
            };

        let mut saved = Vec::new();
        let mut written = None;

        if let Some(summary) = outputs.call_summary.as_deref().filter(|s| is_meaningful(Some(*s))) {
            let summary = summary.trim();
            let body = if transcript.is_empty() { summary } else { transcript };
            match memory::insert_memory(pool, system_user.id, assistant_id, body, summary).await {
                Ok(m) => {
                    info!("Saved memory from webhook: {}", m.id);
                    saved.push(format!("Memory with summary (id: {})", m.id));
                    written = Some(m.id);
                }
                Err(e) => error!("Error saving memory from webhook: {}", e),
            }
        }

        if let Some(candidate) = outputs
            .memory_candidate
            .as_deref()
            .filter(|c| is_meaningful(Some(*c)))
        {
            let candidate = candidate.trim();
            let target = match written {
                Some(id) => Some(id),
                None => match memory::latest_memory_for(pool, system_user.id, assistant_id).await {
                    Ok(found) => found.map(|m| m.id),
                    Err(e) => {
                        error!("Error looking up memory for candidate: {}", e);
                        None
                    }
                },
            };

            match target {
                Some(id) => {
                    let addition = format!("\n\nMemory: {}", candidate);
                    match memory::append_to_summary(pool, id, &addition).await {
                        Ok(()) => saved.push(format!("Updated memory {} with candidate", id)),
                        Err(e) => error!("Error updating memory: {}", e),
                    }
                }
                None => {
                    let body = if transcript.is_empty() { candidate } else { transcript };
                    match memory::insert_memory(pool, system_user.id, assistant_id, body, candidate)
                        .await
                    {
                        Ok(m) => {
                            info!("Saved memory candidate: {}", m.id);
                            saved.push(format!("Memory candidate (id: {})", m.id));
                        }
                        Err(e) => error!("Error saving memory candidate: {}", e),
                    }
                }
            }
        }

        WebhookOutcome::processed(saved)
    }
}
