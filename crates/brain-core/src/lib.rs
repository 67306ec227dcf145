//! Core trait and types for brain implementations.
//!
//! This crate provides the shared interface between the text-generation
//! backends and the rest of the gateway. It defines:
//!
//! - [`Brain`] - The trait that all brain implementations must implement
//! - [`ChatRequest`] / [`ChatResult`] - Input and normalized output of a chat call
//! - [`BrainError`] - Error types used inside brain implementations
//!
//! A brain never fails towards its caller: every failure is folded into a
//! [`ChatResult`] carrying a sentinel model marker ([`MODEL_FALLBACK`] or
//! [`MODEL_ERROR`]).
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, Brain, ChatRequest, ChatResult};
//!
//! struct MyBrain;
//!
//! #[async_trait]
//! impl Brain for MyBrain {
//!     async fn send_message(&self, request: ChatRequest) -> ChatResult {
//!         ChatResult::new("Hello!", "my-model", request.language_or_default())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBrain"
//!     }
//! }
//! ```

mod error;
mod message;
mod prompt;
mod trait_def;

pub use error::BrainError;
pub use message::{ChatRequest, ChatResult, DEFAULT_LANGUAGE, MODEL_ERROR, MODEL_FALLBACK};
pub use prompt::hash_prompt;
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
