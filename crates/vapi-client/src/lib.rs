//! Vapi voice platform client library.
//!
//! This crate provides a Rust client for the Vapi REST API. It supports:
//!
//! - Starting, stopping and querying voice call sessions ([`VoiceSessions`])
//! - Uploading voice samples and managing voice clones ([`VoiceClones`])
//! - Provider connectivity checks
//!
//! Session operations never fail towards the caller. Missing configuration
//! or provider errors are reported as `mock`, `demo` or `error` sessions.
//! Cloning operations propagate a [`VapiError`] instead.
//!
//! # Example
//!
//! ```no_run
//! use vapi_client::{VapiClient, VapiConfig, VoiceSessions};
//!
//! # async fn example() -> Result<(), vapi_client::VapiError> {
//! let client = VapiClient::new(VapiConfig::from_env())?;
//! let sessions = VoiceSessions::new(client);
//!
//! let session = sessions.start(Some("en"), None).await;
//! println!("Session {} is {}", session.id, session.status);
//!
//! let outcome = sessions.stop(&session.id).await;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

pub mod attempt;
pub mod client;
pub mod clone;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod validation;

pub use attempt::first_success;
pub use client::VapiClient;
pub use clone::{content_type_for, VoiceClones};
pub use config::{VapiConfig, VapiConfigBuilder};
pub use error::VapiError;
pub use session::VoiceSessions;
pub use types::*;
pub use validation::is_uuid;
