//! Sliding-window rate limiting
//!
//! Tracks request timestamps per caller identity over a trailing window.
//! The evict-count-append sequence runs under the key's shard guard, so two
//! concurrent requests from one identity can never both slip past the limit.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

/// Outcome of an admission check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Request count in the window before this request
    pub current_count: u32,
    /// Maximum requests allowed per window
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Seconds until a slot frees up (only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

/// Sliding-window rate limiter keyed by caller identity.
///
/// Identities live in a sharded concurrent map, so distinct callers do not
/// contend on a single lock. Stale timestamps are evicted lazily on every
/// check; [`RateLimiter::sweep`] additionally drops identities whose windows
/// are fully stale.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    windows: DashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the standard 60-second window.
    pub fn new(limit: u32) -> Self {
        Self::with_window(limit, Duration::from_secs(60))
    }

    /// Create a limiter with a custom window.
    pub fn with_window(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: DashMap::new(),
        }
    }

    /// Atomically check and, if admitted, record a request for `key`.
    ///
    /// Rejected requests are not recorded.
    pub fn check_and_record(&self, key: &str) -> RateLimitDecision {
        self.check_and_record_at(key, Instant::now())
    }

    /// Clock-injected variant of [`RateLimiter::check_and_record`].
    ///
    /// Production callers use the wall-clock wrapper; tests drive this one
    /// with manufactured instants for deterministic window behavior.
    pub fn check_and_record_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        // Avoid the String allocation if the key is already tracked
        let mut timestamps = if let Some(entry) = self.windows.get_mut(key) {
            entry
        } else {
            self.windows.entry(key.to_string()).or_default()
        };

        // Evict timestamps older than the trailing window
        timestamps.retain(|&t| now.duration_since(t) < self.window);

        let current_count = timestamps.len() as u32;
        let allowed = current_count < self.limit;
        let remaining = self.limit.saturating_sub(current_count);

        // Time until the oldest recorded request leaves the window
        let reset_after_secs = match timestamps.first() {
            Some(&oldest) => self.window.saturating_sub(now.duration_since(oldest)).as_secs(),
            None => self.window.as_secs(),
        };

        let retry_after_secs = if allowed {
            timestamps.push(now);
            None
        } else {
            debug!(
                "rate limit exceeded for {}: {}/{} requests",
                key, current_count, self.limit
            );
            Some(reset_after_secs.max(1))
        };

        RateLimitDecision {
            allowed,
            current_count,
            limit: self.limit,
            remaining: if allowed { remaining.saturating_sub(1) } else { remaining },
            retry_after_secs,
        }
    }

    /// Drop identities whose windows are fully stale.
    pub fn sweep(&self) {
        self.sweep_at(Instant::now());
    }

    fn sweep_at(&self, now: Instant) {
        self.windows.retain(|_, timestamps| {
            timestamps.retain(|&t| now.duration_since(t) < self.window);
            !timestamps.is_empty()
        });
    }

    /// Spawn a background task that sweeps stale identities once per window.
    pub fn start_sweep_task(self: Arc<Self>) {
        let limiter = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(limiter.window);
            loop {
                interval.tick().await;
                limiter.sweep();
            }
        });
    }

    /// The configured per-window limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.windows.len()
    }
}
