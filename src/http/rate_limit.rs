//! Fixed-interval request pacing
//!
//! Uses the governor crate with a quota of one permit per interval and a
//! burst of one. The first acquisition is immediate; each later one waits
//! out whatever remains of the interval. The spacing is fixed, never
//! adaptive: quota headers from the service are not consulted.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::sync::Arc;
use std::time::Duration;

/// Spaces successive requests by a fixed interval
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Option<Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>>,
}

impl RequestPacer {
    /// Create a pacer with the given inter-request interval
    ///
    /// A zero interval disables pacing entirely.
    pub fn new(interval: Duration) -> Self {
        let limiter = Quota::with_period(interval).map(|quota| Arc::new(Governor::direct(quota)));
        Self { limiter }
    }

    /// Create a pacer that never waits
    pub fn disabled() -> Self {
        Self { limiter: None }
    }

    /// Whether this pacer enforces an interval
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until the next request may be made
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Try to acquire a permit without waiting
    pub fn try_acquire(&self) -> bool {
        self.limiter
            .as_ref()
            .map_or(true, |limiter| limiter.check().is_ok())
    }
}

impl std::fmt::Debug for RequestPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPacer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
