//! Pacing between API calls.
//!
//! The Notion API rate-limits integrations, so the client pauses after each
//! discovery page and each detail fetch. The policy is injectable: the
//! default is a fixed short delay, and alternative strategies (token bucket,
//! adaptive backoff) can be supplied by implementing [`PacingPolicy`].

use async_trait::async_trait;
use std::time::Duration;

/// Decides how long to pause between consecutive API calls.
///
/// Implementers must be `Send + Sync`; the client holds the policy as a
/// `Box<dyn PacingPolicy>`.
#[async_trait]
pub trait PacingPolicy: Send + Sync {
    /// Suspends until the next call may be issued.
    async fn pause(&self);
}

/// Fixed-interval pacing: sleep the same duration after every call.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }
}

impl Default for FixedDelay {
    /// 100 ms, comfortably under the Notion rate limit of 3 requests/second.
    fn default() -> Self {
        FixedDelay::new(Duration::from_millis(100))
    }
}

#[async_trait]
impl PacingPolicy for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
