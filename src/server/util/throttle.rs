//! Fixed-delay pacing for batches of upstream calls.
//!
//! The upstream army-list endpoint rejects bursts. Every call to [`Throttle::wait`] suspends the
//! caller for the same flat interval regardless of how long ago the previous upstream call
//! finished. This is not a token bucket: it holds only because callers issue their requests
//! strictly one at a time.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    /// Creates a throttle pausing for `interval`, taken from `THROTTLE_INTERVAL_MS`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Suspends the current task for the configured interval.
    ///
    /// Dropping the returned future (for example when the client disconnects) cancels the wait.
    pub async fn wait(&self) {
        tokio::time::sleep(self.interval).await;
    }
}
