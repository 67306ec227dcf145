//! The Brain trait definition.

use async_trait::async_trait;

use crate::message::{ChatRequest, ChatResult};

/// A text-generation backend.
///
/// Implementations must not fail towards the caller: provider errors,
/// missing configuration and empty responses are all reported through the
/// returned [`ChatResult`]. This trait is object-safe and can be used with
/// `Arc<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Send a message and get a normalized response.
    async fn send_message(&self, request: ChatRequest) -> ChatResult;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;

    /// Check if the brain can reach a real provider.
    ///
    /// Default implementation always returns true.
    fn is_configured(&self) -> bool {
        true
    }
}
