//! Retry policy: attempt bounds and backoff computation.

use std::time::Duration;

use rand::Rng;

use crate::error::ApiError;

/// Maximum number of HTTP attempts per logical call.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Cap for the computed exponential backoff.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Jitter applied to the computed backoff, as a percentage of the delay.
pub const DEFAULT_JITTER_PCT: u8 = 20;

/// Decides whether and when a failed attempt is retried.
///
/// Only transient error kinds are retried (see
/// [`ErrorKind::is_retryable`](crate::ErrorKind::is_retryable)). The computed
/// delay grows exponentially from `base_delay`, is capped at `max_delay` and
/// is jittered by up to `jitter_pct` percent in either direction. A server
/// `Retry-After` on a rate-limited response takes precedence over the
/// computed backoff and is not capped.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter_pct: u8,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            jitter_pct: DEFAULT_JITTER_PCT,
        }
    }
}

impl RetryPolicy {
    /// A policy that fails on the first error.
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter_pct: 0,
        }
    }

    /// Delay to wait before the next attempt, or `None` when the error is
    /// terminal. `attempt` is the number of the attempt that just failed,
    /// starting at 1; once it reaches `max_attempts` nothing is retried
    /// regardless of kind.
    pub fn delay_before_retry(&self, error: &ApiError, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts || !error.kind.is_retryable() {
            return None;
        }

        // The server directive wins over computed backoff, uncapped.
        if let Some(after) = error.retry_after {
            return Some(after);
        }

        let exp = attempt.saturating_sub(1).min(20);
        let mut delay = self.base_delay.saturating_mul(1u32 << exp);
        if delay > self.max_delay {
            delay = self.max_delay;
        }
        Some(self.apply_jitter(delay))
    }

    /// Uniform jitter in `[delay - jitter%, delay + jitter%]`.
    fn apply_jitter(&self, delay: Duration) -> Duration {
        if self.jitter_pct == 0 || delay.is_zero() {
            return delay;
        }

        let delay_ms = delay.as_millis() as u64;
        let jitter_ms = delay_ms * u64::from(self.jitter_pct) / 100;
        if jitter_ms == 0 {
            return delay;
        }

        let offset = rand::thread_rng().gen_range(0..=jitter_ms * 2);
        Duration::from_millis(delay_ms - jitter_ms + offset)
    }
}
