//! Attempt budget and backoff schedule.

use std::fmt;
use std::sync::Arc;

/// Wait before the next attempt, as a function of the 0-based index of the
/// attempt that just failed. Whole seconds, since that is what gets logged.
#[derive(Clone)]
pub enum Backoff {
    /// Same wait after every failure.
    Fixed { secs: u64 },
    /// `base * 2^attempt`, capped at `max`.
    Exponential { base_secs: u64, max_secs: u64 },
    /// Caller-supplied schedule.
    Custom(Arc<dyn Fn(u32) -> u64 + Send + Sync>),
}

impl Backoff {
    /// No waiting at all; what tests use.
    pub const fn none() -> Self {
        Backoff::Fixed { secs: 0 }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(u32) -> u64 + Send + Sync + 'static,
    {
        Backoff::Custom(Arc::new(f))
    }

    pub fn wait_secs(&self, attempt: u32) -> u64 {
        match self {
            Backoff::Fixed { secs } => *secs,
            Backoff::Exponential {
                base_secs,
                max_secs,
            } => {
                let exp = 1u64 << attempt.min(16);
                base_secs.saturating_mul(exp).min(*max_secs)
            }
            Backoff::Custom(f) => f(attempt),
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Fixed { secs: 5 }
    }
}

impl fmt::Debug for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backoff::Fixed { secs } => f.debug_struct("Fixed").field("secs", secs).finish(),
            Backoff::Exponential {
                base_secs,
                max_secs,
            } => f
                .debug_struct("Exponential")
                .field("base_secs", base_secs)
                .field("max_secs", max_secs)
                .finish(),
            Backoff::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// How many attempts a transfer gets and how long to wait between them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first. Zero is treated as one.
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Backoff::default(),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Single attempt, no retries.
    pub fn once() -> Self {
        Self::new(1, Backoff::none())
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Wait after failed attempt `attempt` (0-based), or `None` if that was the
    /// last permitted attempt.
    pub fn wait_after(&self, attempt: u32) -> Option<u64> {
        if attempt.saturating_add(1) >= self.attempts() {
            return None;
        }
        Some(self.backoff.wait_secs(attempt))
    }
}
