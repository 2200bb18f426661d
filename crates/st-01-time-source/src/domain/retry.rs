//! Retry policy for the fetch loop
//!
//! Default is a fixed one second delay with no attempt cap: a failed fetch is
//! retried forever until it succeeds or the source is shut down.

use std::time::Duration;

/// Delay applied between one failed attempt and the next.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How long to wait before re-issuing a failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Same delay after every failure.
    Fixed { delay: Duration },
    /// `initial * multiplier^(n-1)` after the n-th failure, capped at `max`.
    Exponential {
        initial: Duration,
        max: Duration,
        multiplier: u32,
    },
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Fixed {
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn fixed(delay: Duration) -> Self {
        RetryPolicy::Fixed { delay }
    }

    pub fn exponential(initial: Duration, max: Duration, multiplier: u32) -> Self {
        RetryPolicy::Exponential {
            initial,
            max,
            multiplier,
        }
    }

    /// Delay after the `failures`-th consecutive failure (1-based).
    pub fn delay_for(&self, failures: u32) -> Duration {
        match self {
            RetryPolicy::Fixed { delay } => *delay,
            RetryPolicy::Exponential {
                initial,
                max,
                multiplier,
            } => {
                let exponent = failures.saturating_sub(1);
                let factor = multiplier.checked_pow(exponent).unwrap_or(u32::MAX);
                initial.saturating_mul(factor).min(*max)
            }
        }
    }
}
