//! Mock brain implementations for chat and summarization tests.
//!
//! This crate provides mock implementations of the `Brain` trait:
//! - `ScriptedBrain` - Answers with a fixed reply and records every request
//! - `DelayedBrain` - Waits before delegating to another brain
//!
//! For production text chat, use the `gemini-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, ChatRequest, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() {
//!     let brain = ScriptedBrain::new("Hello back!", "models/test");
//!
//!     let result = brain.send_message(ChatRequest::new("Hello!")).await;
//!     println!("Response: {}", result.text);
//!     assert_eq!(brain.call_count(), 1);
//! }
//! ```

mod delayed;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, ChatRequest, ChatResult};

pub use delayed::DelayedBrain;
pub use scripted::ScriptedBrain;
