//! Text chat endpoints.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use brain_core::ChatRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

/// Languages offered by the client.
pub const LANGUAGES: [(&str, &str); 7] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
];

/// Models offered by the client.
pub const MODELS: [(&str, &str); 3] = [
    ("gemini-1.5-flash", "Gemini 1.5 Flash (FREE)"),
    ("gemini-1.5-pro", "Gemini 1.5 Pro (FREE)"),
    ("gemini-pro", "Gemini Pro (FREE)"),
];

#[derive(Debug, Deserialize)]
pub struct TextChatRequest {
    pub message: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextChatResponse {
    pub response: String,
    pub latency_ms: f64,
    pub model_used: String,
    pub language: String,
}

#[derive(Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct LanguageList {
    pub languages: Vec<Language>,
}

#[derive(Serialize)]
pub struct Model {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct ModelList {
    pub models: Vec<Model>,
}

/// Send a text message and return the reply.
///
/// Provider problems come back as a reply with a sentinel model, never
/// as an error status.
pub async fn send_text(
    State(state): State<AppState>,
    Json(req): Json<TextChatRequest>,
) -> Json<TextChatResponse> {
    let started = Instant::now();

    let mut request = ChatRequest::new(req.message);
    if let Some(model) = req.model {
        request = request.with_model(model);
    }
    if let Some(language) = req.language {
        request = request.with_language(language);
    }

    let result = state.brain.send_message(request).await;
    let latency_ms = round_ms(started.elapsed().as_secs_f64() * 1000.0);
    debug!(model = %result.model_used, latency_ms, "Chat reply ready");

    Json(TextChatResponse {
        response: result.text,
        latency_ms,
        model_used: result.model_used,
        language: result.language,
    })
}

/// Supported languages.
pub async fn languages() -> Json<LanguageList> {
    Json(LanguageList {
        languages: LANGUAGES
            .iter()
            .map(|&(code, name)| Language { code, name })
            .collect(),
    })
}

/// Selectable models.
pub async fn models() -> Json<ModelList> {
    Json(ModelList {
        models: MODELS.iter().map(|&(id, name)| Model { id, name }).collect(),
    })
}

/// Round to two decimal places.
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
