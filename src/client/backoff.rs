//! Exponential backoff with additive jitter.
//!
//! `delay(k) = base * growth^k + jitter`, with `jitter` drawn uniformly from
//! the integers in `[-jitter_ms, +jitter_ms)`. The result is clamped at zero.
//!
//! # Examples
//!
//! ```
//! use account_api_client::client::BackoffPolicy;
//! use std::time::Duration;
//!
//! let policy = BackoffPolicy::default();
//! let delay = policy.delay(0);
//! assert!(delay >= Duration::from_millis(450) && delay < Duration::from_millis(550));
//! ```

use rand::Rng;
use serde::Deserialize;
use std::time::Duration;

/// Parameters of the inter-attempt delay, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackoffPolicy {
    /// Delay before the first retry
    pub base_ms: u64,
    /// Multiplier applied per attempt
    pub growth: f64,
    /// Half-width of the jitter window; 0 disables jitter
    pub jitter_ms: u64,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        BackoffPolicy {
            base_ms: 500,
            growth: 1.5,
            jitter_ms: 50,
        }
    }
}

impl BackoffPolicy {
    /// Delay to wait after the retryable failure of attempt `attempt` (0-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        self.delay_with(attempt, &mut rand::rng())
    }

    /// Same as [`delay`](Self::delay) with a caller-supplied RNG.
    pub fn delay_with<R: Rng + ?Sized>(&self, attempt: u32, rng: &mut R) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            let width = self.jitter_ms.min(i64::MAX as u64) as i64;
            rng.random_range(-width..width)
        };

        let millis = self.exponential_ms(attempt) + jitter as f64;
        if millis.is_nan() || millis <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
    }

    /// The jitter-free exponential term for `attempt`, in milliseconds.
    pub fn exponential_ms(&self, attempt: u32) -> f64 {
        self.base_ms as f64 * self.growth.powf(attempt as f64)
    }
}
