//! Retry policies.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::RetryStatus;
use crate::typeclass::{Monoid, Semigroup};

type DelayFunction = dyn Fn(&RetryStatus) -> Option<Duration> + Send + Sync;

/// Decides whether to retry, and how long to wait first.
///
/// A policy is a pure function from the current [`RetryStatus`] to the delay
/// before the next attempt; `None` stops the loop. Policies are cheap to
/// clone and combine with [`Semigroup::combine`]: the combined policy
/// retries only while both do, waiting the longer of the two delays.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use fpcomb::retry::{RetryPolicy, RetryStatus};
/// use fpcomb::typeclass::Semigroup;
///
/// let policy = RetryPolicy::exponential_backoff(Duration::from_millis(10))
///     .combine(RetryPolicy::limit_retries(3))
///     .capped(Duration::from_millis(25));
///
/// let mut status = RetryStatus::default();
/// let mut delays = Vec::new();
/// while let Some(delay) = policy.delay(&status) {
///     delays.push(delay.as_millis());
///     status = status.advance(delay);
/// }
/// assert_eq!(delays, vec![10, 20, 25]);
/// ```
#[derive(Clone)]
#[must_use]
pub struct RetryPolicy {
    delay_function: Arc<DelayFunction>,
}

impl RetryPolicy {
    /// Builds a policy from a delay function.
    pub fn new<F>(delay_function: F) -> Self
    where
        F: Fn(&RetryStatus) -> Option<Duration> + Send + Sync + 'static,
    {
        Self {
            delay_function: Arc::new(delay_function),
        }
    }

    /// The delay before the next attempt, or `None` to stop.
    #[must_use]
    pub fn delay(&self, status: &RetryStatus) -> Option<Duration> {
        (self.delay_function)(status)
    }

    /// Retries immediately, at most `max_retries` times.
    pub fn limit_retries(max_retries: u32) -> Self {
        Self::new(move |status| (status.iter_number < max_retries).then_some(Duration::ZERO))
    }

    /// Waits `delay` before every retry, forever.
    pub fn constant_delay(delay: Duration) -> Self {
        Self::new(move |_| Some(delay))
    }

    /// Waits `base * 2^n` before retry `n`, forever.
    ///
    /// Delays saturate at [`Duration::MAX`] instead of overflowing.
    pub fn exponential_backoff(base: Duration) -> Self {
        Self::new(move |status| {
            let factor = 2_u32.checked_pow(status.iter_number);
            Some(
                factor
                    .and_then(|factor| base.checked_mul(factor))
                    .unwrap_or(Duration::MAX),
            )
        })
    }

    /// Waits `base * fib(n + 1)` before retry `n` (1, 1, 2, 3, 5, ... times
    /// `base`), forever.
    pub fn fibonacci_backoff(base: Duration) -> Self {
        Self::new(move |status| {
            Some(
                fibonacci(status.iter_number.saturating_add(1))
                    .and_then(|factor| base.checked_mul(factor))
                    .unwrap_or(Duration::MAX),
            )
        })
    }

    /// Limits every delay of this policy to at most `max_delay`.
    pub fn capped(self, max_delay: Duration) -> Self {
        Self::new(move |status| self.delay(status).map(|delay| delay.min(max_delay)))
    }

    /// Stops as soon as this policy asks for a delay of `max_delay` or more.
    pub fn limit_retries_by_delay(self, max_delay: Duration) -> Self {
        Self::new(move |status| self.delay(status).filter(|delay| *delay < max_delay))
    }

    /// Stops once the total time slept would exceed `max_cumulative`.
    pub fn limit_retries_by_cumulative_delay(self, max_cumulative: Duration) -> Self {
        Self::new(move |status| {
            self.delay(status).and_then(|delay| {
                let total = status.cumulative_delay.checked_add(delay)?;
                (total <= max_cumulative).then_some(delay)
            })
        })
    }

    /// Same as `self.combine(RetryPolicy::limit_retries(max_retries))`.
    pub fn with_max_retries(self, max_retries: u32) -> Self {
        self.combine(Self::limit_retries(max_retries))
    }
}

fn fibonacci(n: u32) -> Option<u32> {
    let (mut current, mut next) = (0_u32, 1_u32);
    for _ in 0..n {
        let sum = current.checked_add(next)?;
        current = next;
        next = sum;
    }
    Some(current)
}

impl Semigroup for RetryPolicy {
    fn combine(self, other: Self) -> Self {
        Self::new(move |status| {
            let first = self.delay(status)?;
            let second = other.delay(status)?;
            Some(first.max(second))
        })
    }
}

impl Monoid for RetryPolicy {
    /// Retries forever without waiting.
    fn empty() -> Self {
        Self::new(|_| Some(Duration::ZERO))
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("RetryPolicy(<function>)")
    }
}
