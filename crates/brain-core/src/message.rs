//! Chat request and result types.

use serde::{Deserialize, Serialize};

/// Language assumed when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Model marker used when the brain is not configured.
pub const MODEL_FALLBACK: &str = "fallback";

/// Model marker used when the provider call failed.
pub const MODEL_ERROR: &str = "error";

/// A text chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Preferred model, if any.
    #[serde(default)]
    pub model: Option<String>,
    /// Language code (e.g. "en", "es").
    #[serde(default)]
    pub language: Option<String>,
}

impl ChatRequest {
    /// Create a request with no model or language preference.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            model: None,
            language: None,
        }
    }

    /// Set the preferred model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the response language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The requested language, or [`DEFAULT_LANGUAGE`].
    pub fn language_or_default(&self) -> String {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string()
    }
}

/// Normalized result of a chat call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Response text (or an explanation when something went wrong).
    pub text: String,
    /// Model that produced the text, or a sentinel marker.
    pub model_used: String,
    /// Language of the response.
    pub language: String,
}

impl ChatResult {
    /// Create a result.
    pub fn new(
        text: impl Into<String>,
        model_used: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            model_used: model_used.into(),
            language: language.into(),
        }
    }

    /// Whether this result carries a sentinel marker instead of a real model.
    pub fn is_degraded(&self) -> bool {
        self.model_used == MODEL_FALLBACK || self.model_used == MODEL_ERROR
    }
}
