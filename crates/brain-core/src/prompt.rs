//! Prompt fingerprinting.
//!
//! Brains log the fingerprint of their fixed prompts at startup so that a
//! change in prompt wording is visible in the logs without printing the
//! prompt itself.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Compute a stable, lowercase hex SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest
        .iter()
        .fold(String::with_capacity(digest.len() * 2), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}
