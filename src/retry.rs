//! Backoff between retry attempts.
//!
//! Which errors are retried is decided by [`Error::is_retryable`](crate::Error::is_retryable);
//! how many attempts are made is bounded by the client's `max_retries`. This module
//! only answers how long to wait before the next attempt.

use rand::Rng;
use std::time::Duration;

/// Exponential backoff with an upper bound and optional jitter.
///
/// # Examples
///
/// ```
/// use renamed::Backoff;
/// use std::time::Duration;
///
/// // 100ms, 200ms, 400ms, 800ms... capped at 5s
/// let backoff = Backoff {
///     initial_delay: Duration::from_millis(100),
///     max_delay: Duration::from_secs(5),
///     jitter: false,
/// };
/// assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backoff {
    /// The delay before the first retry.
    pub initial_delay: Duration,
    /// The maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to randomize delays between 50% and 100% of the computed value.
    pub jitter: bool,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Returns the delay to wait after the given failed attempt (1-indexed).
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        // initial_delay * 2^(attempt - 1)
        let exponent = attempt.saturating_sub(1).min(31) as u32;
        let multiplier = 2u32.saturating_pow(exponent);
        let delay = self
            .initial_delay
            .saturating_mul(multiplier)
            .min(self.max_delay);

        if self.jitter {
            let jitter_factor = rand::thread_rng().gen_range(0.5..=1.0);
            delay.mul_f64(jitter_factor)
        } else {
            delay
        }
    }

    /// A backoff that never waits. Useful in tests.
    pub fn none() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: false,
        }
    }
}
