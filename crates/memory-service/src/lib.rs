//! Conversation memory persistence.
//!
//! [`MemoryService`] stores call transcripts together with a generated
//! summary, manages the users that own them and ingests call-completion
//! webhooks from the voice platform.
//!
//! The service depends on the [`Brain`](brain_core::Brain) trait rather
//! than a concrete provider, so tests can summarize with a mock brain.

mod error;
mod service;
pub mod summary;
pub mod webhook;

pub use error::{MemoryError, Result};
pub use service::{MemoryService, SavedMemory};
pub use webhook::{
    is_meaningful, CallAnalysis, CallData, CallEvent, SavedItems, StructuredOutputs,
    WebhookOutcome, WEBHOOK_USER_EMAIL, WEBHOOK_USER_NAME,
};

pub use database::{Memory, User};
