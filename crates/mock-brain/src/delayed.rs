//! Slow brain - simulates provider latency in front of another brain.

use std::time::Duration;

use brain_core::{async_trait, Brain, ChatRequest, ChatResult};
use tokio::time::sleep;

/// A brain that waits before delegating every request.
///
/// Route tests use it to check that reported chat latency covers the
/// provider call.
pub struct DelayedBrain<B: Brain> {
    inner: B,
    delay: Duration,
}

impl<B: Brain> DelayedBrain<B> {
    /// Wrap `inner`, waiting `delay` before each reply.
    pub fn new(inner: B, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: B, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The wrapped brain.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B: Brain> Brain for DelayedBrain<B> {
    async fn send_message(&self, request: ChatRequest) -> ChatResult {
        sleep(self.delay).await;
        self.inner.send_message(request).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_configured(&self) -> bool {
        self.inner.is_configured()
    }
}
