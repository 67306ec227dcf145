//! Google Gemini-based brain implementation.
//!
//! This crate provides a [`Brain`] that talks to the Gemini REST API
//! (`generativelanguage.googleapis.com`) for free-form text chat.
//!
//! # Features
//!
//! - Resolves a working model from the request preference, the provider's
//!   model listing and a fixed priority list
//! - Human-sounding persona prompt with optional response language
//! - Never fails towards the caller: unconfigured or failing calls produce
//!   an explanatory [`ChatResult`] marked `"fallback"` or `"error"`
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::{Brain, ChatRequest, GeminiBrain};
//!
//! #[tokio::main]
//! async fn main() {
//!     let brain = GeminiBrain::from_env();
//!     let result = brain.send_message(ChatRequest::new("Hello!")).await;
//!     println!("{} ({})", result.text, result.model_used);
//! }
//! ```

mod api_types;
mod brain;
mod config;
mod models;
mod prompt;

pub use brain::GeminiBrain;
pub use config::{GeminiBrainConfig, GeminiBrainConfigBuilder};
pub use models::{candidate_models, namespaced, DEFAULT_MODEL, PREFERRED_MODELS};
pub use prompt::{build_prompt, PERSONA_PROMPT};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, ChatRequest, ChatResult};
