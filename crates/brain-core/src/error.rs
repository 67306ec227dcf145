//! Brain error types.

use thiserror::Error;

/// Errors that can occur inside a brain implementation.
///
/// These never cross the [`Brain`](crate::Brain) boundary; implementations
/// turn them into a user-facing [`ChatResult`](crate::ChatResult).
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain is missing required configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A network request to the provider failed.
    #[error("network error: {0}")]
    Network(String),

    /// The provider rejected or failed the request.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// No candidate model could be initialized.
    #[error("could not initialize any model. Tried: {tried:?}. Last error: {last}")]
    ModelUnavailable { tried: Vec<String>, last: String },

    /// The provider answered but produced no text.
    #[error("no response generated")]
    EmptyResponse,

    /// A timeout occurred while waiting for the provider.
    #[error("request timed out")]
    Timeout,
}
