//! `ReaderIOEither` fixed to a [`Context`] environment and the crate
//! [`Error`].
//!
//! ```rust
//! use std::time::Duration;
//! use fpcomb::context::{self, Context};
//! use fpcomb::control::Either;
//! use fpcomb::Error;
//!
//! let fetch = context::reader_io_either::with_context(
//!     context::reader_io_either::of(42).chain_first(|_| context::reader_io_either::sleep(Duration::from_millis(1))),
//! );
//!
//! assert_eq!(fetch.run(Context::background()).run_unsafe(), Either::Right(42));
//!
//! let (cancelled, cancel) = Context::background().with_cancel();
//! cancel.cancel();
//! assert_eq!(fetch.run(cancelled).run_unsafe(), Either::Left(Error::Cancelled));
//! ```

use std::time::{Duration, Instant};

use super::Context;
use crate::control::Either;
use crate::effect::{self, IO, IOEither, Unlock};
use crate::error::Error;

pub use crate::effect::reader_io_either::{
    sequence_array, sequence_array_par, sequence_array_seq, sequence_record, sequence_record_par,
    sequence_record_seq, sequence_t1, sequence_t2, sequence_t3, sequence_t4, traverse_array,
    traverse_array_par, traverse_array_seq, traverse_array_with_index, traverse_array_with_index_par,
    traverse_array_with_index_seq, traverse_record, traverse_record_par, traverse_record_seq,
};

/// A deferred computation reading a [`Context`] and failing with [`Error`].
pub type ReaderIOEither<A> = effect::ReaderIOEither<Context, Error, A>;

const SLEEP_SLICE: Duration = Duration::from_millis(5);

/// Succeeds with `value`.
pub fn of<A>(value: A) -> ReaderIOEither<A>
where
    A: Clone + Send + Sync + 'static,
{
    ReaderIOEither::of(value)
}

/// Fails with `error`.
pub fn left<A: 'static>(error: Error) -> ReaderIOEither<A> {
    ReaderIOEither::left(error)
}

/// Runs a fallible function of the context, converting its error.
pub fn try_catch<A, X, F>(function: F) -> ReaderIOEither<A>
where
    A: 'static,
    X: Into<Error> + 'static,
    F: Fn(Context) -> Result<A, X> + Send + Sync + 'static,
{
    ReaderIOEither::try_catch(function, Into::into)
}

/// Checks the context before running `computation`, failing with the
/// context's error instead when it is already done.
pub fn with_context<A: 'static>(computation: ReaderIOEither<A>) -> ReaderIOEither<A> {
    ReaderIOEither::new(move |context: Context| {
        let computation = computation.clone();
        IOEither::new(move || match context.err() {
            Some(error) => Either::Left(error),
            None => computation.run(context.clone()).run_unsafe(),
        })
    })
}

/// Runs `computation` under a child context expiring after `timeout`.
///
/// The computation is never interrupted. A success that arrives after the
/// deadline is reported as [`Error::DeadlineExceeded`].
pub fn with_timeout<A: 'static>(timeout: Duration, computation: ReaderIOEither<A>) -> ReaderIOEither<A> {
    ReaderIOEither::new(move |context: Context| {
        let computation = computation.clone();
        IOEither::new(move || {
            let bounded = context.with_timeout(timeout);
            match with_context(computation.clone()).run(bounded.clone()).run_unsafe() {
                Either::Right(_) if bounded.err().is_some() => {
                    tracing::debug!(?timeout, "computation finished after its deadline");
                    Either::Left(bounded.err().unwrap_or(Error::DeadlineExceeded))
                }
                outcome => outcome,
            }
        })
    })
}

/// Runs `computation` while holding the lock acquired by `lock`.
pub fn with_lock<A: 'static>(lock: IO<Unlock>, computation: ReaderIOEither<A>) -> ReaderIOEither<A> {
    computation.with_lock(lock)
}

/// Sleeps for `duration`, waking early with the context's error once it is
/// cancelled or past its deadline.
pub fn sleep(duration: Duration) -> ReaderIOEither<()> {
    ReaderIOEither::new(move |context: Context| {
        IOEither::new(move || {
            // `None` when the wake time overflows: sleep until the context is done.
            let wake_at = Instant::now().checked_add(duration);
            loop {
                if let Some(error) = context.err() {
                    return Either::Left(error);
                }
                let slice = match wake_at {
                    Some(wake_at) => {
                        let now = Instant::now();
                        if now >= wake_at {
                            return Either::Right(());
                        }
                        (wake_at - now).min(SLEEP_SLICE)
                    }
                    None => SLEEP_SLICE,
                };
                std::thread::sleep(slice);
            }
        })
    })
}
