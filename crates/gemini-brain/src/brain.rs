//! GeminiBrain implementation using the Gemini REST API.

use brain_core::{
    async_trait, hash_prompt, Brain, BrainError, ChatRequest, ChatResult, MODEL_ERROR,
    MODEL_FALLBACK,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ModelInfo, ModelList,
};
use crate::config::GeminiBrainConfig;
use crate::models::candidate_models;
use crate::prompt::{build_prompt, PERSONA_PROMPT};

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_MODEL_PAGES: usize = 10;

/// A brain implementation that uses Google's Gemini API for text chat.
///
/// GeminiBrain is stateless between calls: every message resolves a model,
/// generates once and returns. All failures are reported in the returned
/// [`ChatResult`].
pub struct GeminiBrain {
    client: Option<Client>,
    config: GeminiBrainConfig,
    persona_hash: String,
}

impl GeminiBrain {
    /// Create a new GeminiBrain with the given configuration.
    ///
    /// Construction never fails. A missing API key or an HTTP client that
    /// cannot be built is reported on every call instead.
    pub fn new(config: GeminiBrainConfig) -> Self {
        let client = match Client::builder().timeout(config.timeout).build() {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to create HTTP client for Gemini: {}", e);
                None
            }
        };

        let persona_hash = hash_prompt(PERSONA_PROMPT);

        if config.has_api_key() {
            info!(
                model = %config.model,
                persona = %persona_hash,
                "GeminiBrain initialized"
            );
        } else {
            warn!("GOOGLE_API_KEY is not set - text chat will use fallback");
        }

        Self {
            client,
            config,
            persona_hash,
        }
    }

    /// Create a GeminiBrain from environment variables.
    ///
    /// See [`GeminiBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Self {
        Self::new(GeminiBrainConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiBrainConfig {
        &self.config
    }

    /// Get the persona prompt fingerprint.
    pub fn persona_hash(&self) -> &str {
        &self.persona_hash
    }

    /// List the models that support `generateContent`.
    pub async fn list_models(&self) -> Result<Vec<String>, BrainError> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_MODEL_PAGES {
            let url = format!("{}/{}/models", self.config.api_url, API_VERSION);
            let mut query = vec![("pageSize", "1000".to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let page: ModelList = self.get_json(&url, &query).await?;
            names.extend(
                page.models
                    .into_iter()
                    .filter(ModelInfo::supports_generate_content)
                    .map(|m| m.name),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(names)
    }

    fn http(&self) -> Result<&Client, BrainError> {
        self.client
            .as_ref()
            .ok_or_else(|| BrainError::Configuration("HTTP client unavailable".to_string()))
    }

    /// Initialize a handle on the first candidate the provider recognizes.
    async fn init_model(&self, candidates: &[String]) -> Result<String, BrainError> {
        let mut last_error = None;

        for candidate in candidates {
            info!("Attempting to initialize model: {}", candidate);
            let url = format!("{}/{}/{}", self.config.api_url, API_VERSION, candidate);

            match self.get_json::<ModelInfo>(&url, &[]).await {
                Ok(info) => {
                    info!(
                        model = %candidate,
                        display_name = info.display_name.as_deref().unwrap_or(""),
                        "Successfully initialized model"
                    );
                    return Ok(candidate.clone());
                }
                Err(e) => {
                    debug!("Model {} failed: {}", candidate, e);
                    last_error = Some(e.to_string());
                }
            }
        }

        Err(BrainError::ModelUnavailable {
            tried: candidates.to_vec(),
            last: last_error.unwrap_or_else(|| "no candidate models".to_string()),
        })
    }

    /// Resolve a model and generate a reply. Returns the text and model used.
    async fn chat(
        &self,
        request: &ChatRequest,
        available: &[String],
    ) -> Result<(String, String), BrainError> {
        let requested = request
            .model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.config.model.as_str());

        let candidates = candidate_models(requested, available);
        let model = self.init_model(&candidates).await?;

        let prompt = build_prompt(&request.message, request.language.as_deref());
        let completion = self.generate_content(&model, prompt).await?;

        if let Some(ref usage) = completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, candidates: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        let text = completion.text().ok_or(BrainError::EmptyResponse)?;
        Ok((text.trim().to_string(), model))
    }

    /// Make a `generateContent` request.
    async fn generate_content(
        &self,
        model: &str,
        prompt: String,
    ) -> Result<GenerateContentResponse, BrainError> {
        let url = format!(
            "{}/{}/{}:generateContent",
            self.config.api_url, API_VERSION, model
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig::conversational(),
        };

        debug!("Sending generateContent request to {}", model);

        let response = self
            .http()?
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, BrainError> {
        let response = self
            .http()?
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }
}

#[async_trait]
impl Brain for GeminiBrain {
    async fn send_message(&self, request: ChatRequest) -> ChatResult {
        let language = request.language_or_default();

        if !self.config.has_api_key() {
            return ChatResult::new(
                format!(
                    "I received your message: '{}'. Google Gemini API is not configured. \
                     Please add GOOGLE_API_KEY to your .env file for free AI-powered text chat. \
                     Get your free API key from: https://makersuite.google.com/app/apikey",
                    request.message
                ),
                MODEL_FALLBACK,
                language,
            );
        }

        if self.client.is_none() {
            return ChatResult::new(
                format!(
                    "I received your message: '{}'. The HTTP client for the Gemini API \
                     could not be initialized, so text chat is unavailable.",
                    request.message
                ),
                MODEL_ERROR,
                language,
            );
        }

        let available = match self.list_models().await {
            Ok(models) => {
                info!(
                    "Available Gemini models: {:?}",
                    models.iter().take(5).collect::<Vec<_>>()
                );
                models
            }
            Err(e) => {
                warn!("Could not list models: {}", e);
                Vec::new()
            }
        };

        match self.chat(&request, &available).await {
            Ok((text, model)) => ChatResult::new(text, model, language),
            Err(err) => {
                error!(error = %err, "Error calling Gemini API");
                ChatResult::new(
                    format!(
                        "Hey, I got your message but ran into an issue: {}. \
                         Mind checking the backend logs?",
                        diagnose(&err, &available)
                    ),
                    MODEL_ERROR,
                    language,
                )
            }
        }
    }

    fn name(&self) -> &str {
        "GeminiBrain"
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key() && self.client.is_some()
    }
}

fn network_error(e: reqwest::Error) -> BrainError {
    if e.is_timeout() {
        BrainError::Timeout
    } else {
        BrainError::Network(format!("Failed to send request: {}", e))
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, BrainError> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();

        // Try to parse as API error
        if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                api_error.error.message
            )));
        }

        return Err(BrainError::ProcessingFailed(format!(
            "API error ({}): {}",
            status.as_u16(),
            error_text
        )));
    }

    response
        .json()
        .await
        .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))
}

/// Short, user-facing explanation of a failed call.
fn diagnose(err: &BrainError, available: &[String]) -> String {
    let message = err.to_string();
    let lower = message.to_lowercase();

    if lower.contains("api key") || lower.contains("invalid") {
        "API key issue - check GOOGLE_API_KEY in .env file".to_string()
    } else if !available.is_empty() {
        let models: Vec<&str> = available.iter().take(3).map(String::as_str).collect();
        format!("Model error. Available models: {}", models.join(", "))
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brain_name() {
        let brain = GeminiBrain::new(GeminiBrainConfig::default());
        assert_eq!(brain.name(), "GeminiBrain");
        assert!(!brain.is_configured());
        assert_eq!(brain.persona_hash().len(), 64);
    }

    #[tokio::test]
    async fn test_unconfigured_returns_fallback() {
        let brain = GeminiBrain::new(GeminiBrainConfig::default());

        let result = brain.send_message(ChatRequest::new("hello")).await;

        assert_eq!(result.model_used, "fallback");
        assert_eq!(result.language, "en");
        assert!(result.text.contains("'hello'"));
        assert!(result.text.contains("GOOGLE_API_KEY"));
    }

    #[tokio::test]
    async fn test_unconfigured_keeps_language_and_ignores_model() {
        let brain = GeminiBrain::new(GeminiBrainConfig::default());

        let request = ChatRequest::new("bonjour")
            .with_model("gemini-1.5-pro")
            .with_language("fr");
        let result = brain.send_message(request).await;

        assert_eq!(result.model_used, "fallback");
        assert_eq!(result.language, "fr");
        assert!(result.text.contains("bonjour"));
    }

    #[test]
    fn test_diagnose_api_key_hint() {
        let err = BrainError::ProcessingFailed(
            "API error (400): API key not valid. Please pass a valid API key.".to_string(),
        );
        let hint = diagnose(&err, &["models/gemini-pro".to_string()]);
        assert_eq!(hint, "API key issue - check GOOGLE_API_KEY in .env file");
    }

    #[test]
    fn test_diagnose_lists_three_models() {
        let available: Vec<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|m| format!("models/{}", m))
            .collect();
        let hint = diagnose(&BrainError::EmptyResponse, &available);
        assert_eq!(
            hint,
            "Model error. Available models: models/a, models/b, models/c"
        );
    }

    #[test]
    fn test_diagnose_raw_message() {
        let hint = diagnose(&BrainError::Timeout, &[]);
        assert_eq!(hint, "request timed out");
    }
}
