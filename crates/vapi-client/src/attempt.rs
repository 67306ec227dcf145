//! Ordered endpoint fallback.

use std::future::Future;

use tracing::debug;

use crate::error::VapiError;

/// Try each candidate in order and return the first success.
///
/// The winning candidate is returned with its value. When every candidate
/// fails, the error lists each candidate with its failure, in order.
pub async fn first_success<T, F, Fut>(
    candidates: &[String],
    mut attempt: F,
) -> Result<(String, T), VapiError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, VapiError>>,
{
    let mut failures = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match attempt(candidate.clone()).await {
            Ok(value) => return Ok((candidate.clone(), value)),
            Err(e) => {
                debug!("Attempt on {} failed: {}", candidate, e);
                failures.push(format!("{}: {}", candidate, e));
            }
        }
    }

    Err(VapiError::AllAttemptsFailed { attempts: failures })
}
