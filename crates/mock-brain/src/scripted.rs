//! Scripted brain implementation - fixed replies with request capture.

use std::sync::Mutex;

use brain_core::{async_trait, Brain, ChatRequest, ChatResult, MODEL_ERROR, MODEL_FALLBACK};

/// A brain that answers every request with the same reply.
///
/// Every request is recorded so tests can inspect the prompts a caller
/// built. The reported model can be set to one of the degraded markers to
/// simulate an unconfigured or failing provider.
#[derive(Debug)]
pub struct ScriptedBrain {
    reply: String,
    model: String,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBrain {
    /// Create a brain that replies with `reply` as model `model`.
    pub fn new(reply: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            model: model.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A brain that behaves like an unconfigured provider.
    pub fn fallback(reply: impl Into<String>) -> Self {
        Self::new(reply, MODEL_FALLBACK)
    }

    /// A brain that behaves like a failing provider.
    pub fn failing(reply: impl Into<String>) -> Self {
        Self::new(reply, MODEL_ERROR)
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn send_message(&self, request: ChatRequest) -> ChatResult {
        let language = request.language_or_default();
        match self.requests.lock() {
            Ok(mut guard) => guard.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }

        ChatResult::new(self.reply.clone(), self.model.clone(), language)
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }

    fn is_configured(&self) -> bool {
        self.model != MODEL_FALLBACK
    }
}
