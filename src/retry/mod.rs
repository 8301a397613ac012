//! Retry policies and the synchronous retry loop shared by the effect types.
//!
//! A [`RetryPolicy`] only decides; it never sleeps or runs anything. The
//! `retrying` constructors on [`IO`](crate::effect::IO),
//! [`IOEither`](crate::effect::IOEither) and
//! [`ReaderIOEither`](crate::effect::ReaderIOEither) drive the loop through
//! [`retrying`].
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use fpcomb::retry::{apply_policy, RetryPolicy, RetryStatus};
//!
//! let policy = RetryPolicy::constant_delay(Duration::from_millis(5)).with_max_retries(1);
//! let first = apply_policy(&policy, RetryStatus::default()).unwrap();
//!
//! assert_eq!(first.iter_number, 1);
//! assert_eq!(first.cumulative_delay, Duration::from_millis(5));
//! assert_eq!(apply_policy(&policy, first), None);
//! ```

mod policy;
mod status;

pub use policy::RetryPolicy;
pub use status::RetryStatus;

/// Asks `policy` for the next delay and returns the advanced status, or
/// `None` when the policy gives up.
#[must_use]
pub fn apply_policy(policy: &RetryPolicy, status: RetryStatus) -> Option<RetryStatus> {
    policy.delay(&status).map(|delay| status.advance(delay))
}

/// Runs `action` until `should_retry` rejects its result or `policy` gives up.
///
/// The returned value is the first result for which `should_retry` is
/// `false`, or the last result once the policy is exhausted. The thread
/// sleeps between attempts.
pub fn retrying<A, Action, Check>(policy: &RetryPolicy, mut action: Action, should_retry: Check) -> A
where
    Action: FnMut(&RetryStatus) -> A,
    Check: Fn(&A) -> bool,
{
    let mut status = RetryStatus::default();
    loop {
        let result = action(&status);
        if !should_retry(&result) {
            return result;
        }
        let Some(delay) = policy.delay(&status) else {
            tracing::debug!(attempts = status.iter_number + 1, "retry policy exhausted");
            return result;
        };
        tracing::debug!(
            attempt = status.iter_number + 1,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "retrying"
        );
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        status = status.advance(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    fn stops_when_check_is_satisfied() {
        let mut seen = Vec::new();
        let result = retrying(
            &RetryPolicy::limit_retries(10),
            |status| {
                seen.push(status.iter_number);
                status.iter_number
            },
            |value| *value < 2,
        );
        assert_eq!(result, 2);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[rstest]
    fn returns_last_result_when_exhausted() {
        let mut attempts = 0;
        let result = retrying(
            &RetryPolicy::limit_retries(3),
            |_| {
                attempts += 1;
                Err::<(), _>(attempts)
            },
            Result::is_err,
        );
        assert_eq!(result, Err(4));
        assert_eq!(attempts, 4);
    }

    #[rstest]
    fn statuses_accumulate_delay() {
        let mut statuses = Vec::new();
        let policy = RetryPolicy::constant_delay(Duration::from_millis(1)).with_max_retries(2);
        retrying(&policy, |status| statuses.push(*status), |_| true);
        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[2].cumulative_delay, Duration::from_millis(2));
        assert_eq!(statuses[2].previous_delay, Some(Duration::from_millis(1)));
    }
}
