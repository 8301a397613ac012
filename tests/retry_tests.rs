#![cfg(feature = "effect")]
//! Scenario tests for retry policies and the `retrying` constructors.

use fpcomb::control::Either;
use fpcomb::effect::{IO, IOEither, ReaderIOEither};
use fpcomb::retry::{self, RetryPolicy, RetryStatus, apply_policy};
use fpcomb::typeclass::Semigroup;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

fn delays(policy: &RetryPolicy, limit: usize) -> Vec<u128> {
    let mut status = RetryStatus::default();
    let mut collected = Vec::new();
    while collected.len() < limit {
        let Some(next) = apply_policy(policy, status) else { break };
        collected.push(next.previous_delay.map_or(0, |delay| delay.as_millis()));
        status = next;
    }
    collected
}

/// Fails until the `succeed_on`-th attempt (1-based).
fn flaky(attempts: &Arc<AtomicU32>, succeed_on: u32) -> IOEither<String, u32> {
    let attempts = Arc::clone(attempts);
    IOEither::new(move || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt >= succeed_on { Either::Right(attempt) } else { Either::Left(format!("attempt {attempt} failed")) }
    })
}

// =============================================================================
// Policies
// =============================================================================

#[rstest]
#[case(RetryPolicy::limit_retries(3), vec![0, 0, 0])]
#[case(RetryPolicy::constant_delay(Duration::from_millis(7)), vec![7, 7, 7, 7])]
#[case(RetryPolicy::exponential_backoff(Duration::from_millis(2)), vec![2, 4, 8, 16])]
#[case(RetryPolicy::fibonacci_backoff(Duration::from_millis(3)), vec![3, 3, 6, 9])]
#[case(RetryPolicy::exponential_backoff(Duration::from_millis(5)).capped(Duration::from_millis(12)), vec![5, 10, 12, 12])]
#[case(RetryPolicy::exponential_backoff(Duration::from_millis(5)).limit_retries_by_delay(Duration::from_millis(20)), vec![5, 10])]
#[case(RetryPolicy::constant_delay(Duration::from_millis(10)).limit_retries_by_cumulative_delay(Duration::from_millis(30)), vec![10, 10, 10])]
fn policy_delays(#[case] policy: RetryPolicy, #[case] expected: Vec<u128>) {
    assert_eq!(delays(&policy, 4), expected);
}

#[rstest]
fn combined_policy_takes_longer_delay_and_earlier_stop() {
    let policy = RetryPolicy::constant_delay(Duration::from_millis(4))
        .combine(RetryPolicy::exponential_backoff(Duration::from_millis(1)))
        .combine(RetryPolicy::limit_retries(4));
    assert_eq!(delays(&policy, 10), vec![4, 4, 4, 8]);
}

#[rstest]
fn apply_policy_advances_status() {
    let status = apply_policy(&RetryPolicy::constant_delay(Duration::from_millis(5)), RetryStatus::default());
    assert_eq!(
        status,
        Some(RetryStatus {
            iter_number: 1,
            cumulative_delay: Duration::from_millis(5),
            previous_delay: Some(Duration::from_millis(5)),
        })
    );
}

// =============================================================================
// retrying
// =============================================================================

#[rstest]
fn io_either_retries_until_success() {
    let attempts = Arc::new(AtomicU32::new(0));
    let source = flaky(&attempts, 3);
    let retried = IOEither::retrying(RetryPolicy::limit_retries(5), move |_| source.clone(), Either::is_left);
    assert_eq!(retried.run_unsafe(), Either::Right(3));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[rstest]
fn io_either_returns_last_left_when_exhausted() {
    let attempts = Arc::new(AtomicU32::new(0));
    let source = flaky(&attempts, 10);
    let retried = IOEither::retrying(RetryPolicy::limit_retries(2), move |_| source.clone(), Either::is_left);
    assert_eq!(retried.run_unsafe(), Either::Left("attempt 3 failed".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[rstest]
fn io_retrying_sees_status() {
    let retried = IO::retrying(
        RetryPolicy::limit_retries(4),
        |status: &RetryStatus| IO::of(status.iter_number),
        |iteration: &u32| *iteration < 2,
    );
    assert_eq!(retried.run_unsafe(), 2);
}

#[rstest]
fn reader_io_either_retrying_reads_environment() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let retried = ReaderIOEither::retrying(
        RetryPolicy::limit_retries(5),
        move |_| {
            let counter = Arc::clone(&counter);
            ReaderIOEither::new(move |threshold: u32| {
                let counter = Arc::clone(&counter);
                IOEither::new(move || {
                    let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    if attempt >= threshold { Either::Right(attempt) } else { Either::Left(attempt) }
                })
            })
        },
        Either::is_left,
    );
    assert_eq!(retried.run(2).run_unsafe(), Either::Right(2));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[rstest]
fn free_retrying_loop() {
    let mut calls = 0;
    let result = retry::retrying(
        &RetryPolicy::limit_retries(10),
        |_| {
            calls += 1;
            calls
        },
        |count| *count < 4,
    );
    assert_eq!(result, 4);
}
