//! IOEither - a deferred computation that may fail.
//!
//! `IOEither<E, A>` is an [`IO`] producing an [`Either<E, A>`]. Every
//! combinator is built on the `IO` below it: the computation is described
//! now and executed by [`IOEither::run_unsafe`], and a `Left` short-circuits
//! the rest of the chain.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::effect::IOEither;
//!
//! fn parse(text: &'static str) -> IOEither<String, i32> {
//!     IOEither::try_catch(move || text.parse::<i32>(), |error| error.to_string())
//! }
//!
//! let sum = parse("40").chain(|a| parse("2").map(move |b| a + b));
//! assert_eq!(sum.run_unsafe(), Either::Right(42));
//!
//! let failed = parse("forty").chain(|a| parse("2").map(move |b| a + b));
//! assert!(failed.run_unsafe().is_left());
//! ```

mod bind;
mod bracket;
#[cfg(feature = "serde")]
mod log;
mod monoid;
mod traverse;

pub use monoid::{alt_monoid, alternative_monoid};
pub use traverse::{
    sequence_array, sequence_array_par, sequence_array_seq, sequence_record, sequence_record_par,
    sequence_record_seq, sequence_t1, sequence_t2, sequence_t3, sequence_t4, traverse_array,
    traverse_array_par, traverse_array_seq, traverse_array_with_index,
    traverse_array_with_index_par, traverse_array_with_index_seq, traverse_record,
    traverse_record_par, traverse_record_seq,
};

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use super::IO;
use super::lock::Unlock;
use crate::control::Either;
use crate::error::Error;
use crate::retry::{RetryPolicy, RetryStatus};

/// A deferred, re-runnable computation that yields an error `E` or a value
/// `A`.
#[must_use = "effects do nothing unless run"]
pub struct IOEither<E, A> {
    io: IO<Either<E, A>>,
}

impl<E: 'static, A: 'static> IOEither<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a closure producing an `Either`.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> Either<E, A> + Send + Sync + 'static,
    {
        Self { io: IO::new(action) }
    }

    /// A computation that always succeeds with `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move || Either::Right(value.clone()))
    }

    /// Same as [`IOEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::right(value)
    }

    /// A computation that always fails with `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::new(move || Either::Left(error.clone()))
    }

    /// Succeeds with the value produced by `io`.
    pub fn right_io(io: IO<A>) -> Self {
        io.map(Either::Right).into()
    }

    /// Fails with the error produced by `io`.
    pub fn left_io(io: IO<E>) -> Self {
        io.map(Either::Left).into()
    }

    /// Replays an already computed `Either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Send + Sync,
        A: Clone + Send + Sync,
    {
        IO::of(either).into()
    }

    /// Succeeds with the content of `option`, or fails with `on_none()`.
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        A: Clone + Send + Sync,
        F: Fn() -> E + Send + Sync + 'static,
    {
        Self::new(move || Either::from_option(option.clone(), &on_none))
    }

    /// Succeeds with `value` when `predicate` holds.
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        A: Clone + Send + Sync,
        P: Fn(&A) -> bool + Send + Sync + 'static,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        Self::new(move || Either::from_predicate(value.clone(), &predicate, &on_false))
    }

    /// Runs a fallible function on every run, mapping its error with
    /// `on_error`.
    pub fn try_catch<X, F, G>(function: F, on_error: G) -> Self
    where
        F: Fn() -> Result<A, X> + Send + Sync + 'static,
        G: Fn(X) -> E + Send + Sync + 'static,
    {
        Self::new(move || Either::try_catch(&function, &on_error))
    }

    /// Converts back into the underlying `IO`.
    pub fn into_io(self) -> IO<Either<E, A>> {
        self.io
    }

    /// Runs the computation.
    pub fn run_unsafe(&self) -> Either<E, A> {
        self.io.run_unsafe()
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.io.map(move |either| either.map(&function)).into()
    }

    /// Transforms the error.
    pub fn map_left<E2, F>(self, function: F) -> IOEither<E2, A>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.io.map(move |either| either.map_left(&function)).into()
    }

    /// Transforms both branches.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> IOEither<E2, B>
    where
        E2: 'static,
        B: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.io
            .map(move |either| either.bimap(&on_left, &on_right))
            .into()
    }

    /// Exchanges error and value.
    pub fn swap(self) -> IOEither<A, E> {
        self.io.map(Either::swap).into()
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a computation that depends on the success value.
    pub fn chain<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        IOEither::new(move || match self.run_unsafe() {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value).run_unsafe(),
        })
    }

    /// Alias for [`IOEither::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Alias for [`IOEither::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function` for its outcome, keeping the original value on
    /// success.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        Self::new(move || {
            self.run_unsafe()
                .chain_first(|value| function(value).run_unsafe())
        })
    }

    /// Chains with a strict `Either`-returning function.
    pub fn chain_either_k<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
    {
        self.io.map(move |either| either.chain(&function)).into()
    }

    /// Chains with an infallible `IO`-returning function.
    pub fn chain_io_k<B, F>(self, function: F) -> IOEither<E, B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        self.chain(move |value| IOEither::right_io(function(value)))
    }

    /// Runs an infallible `IO` for its effect, keeping the original value.
    pub fn chain_first_io_k<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> IO<B> + Send + Sync + 'static,
    {
        Self::new(move || {
            self.run_unsafe().map(|value| {
                function(&value).run_unsafe();
                value
            })
        })
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two successes. `other` runs only if `self` succeeded.
    pub fn map2<B, C, F>(self, other: IOEither<E, B>, function: F) -> IOEither<E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        IOEither::new(move || match self.run_unsafe() {
            Either::Left(error) => Either::Left(error),
            Either::Right(a) => other.run_unsafe().map(|b| function(a, b)),
        })
    }

    /// Combines two successes after running both computations, in order.
    /// The first `Left` is reported.
    pub fn map2_par<B, C, F>(self, other: IOEither<E, B>, function: F) -> IOEither<E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        self.io.map2(other.io, move |a, b| a.map2(b, &function)).into()
    }

    /// Pairs two successes.
    pub fn product<B: 'static>(self, other: IOEither<E, B>) -> IOEither<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Sequences two computations, keeping the first value.
    pub fn ap_first<B: 'static>(self, other: IOEither<E, B>) -> Self {
        self.map2(other, |a, _| a)
    }

    /// Sequences two computations, keeping the second value.
    pub fn ap_second<B: 'static>(self, other: IOEither<E, B>) -> IOEither<E, B> {
        self.map2(other, |_, b| b)
    }

    // =========================================================================
    // Elimination and recovery
    // =========================================================================

    /// Handles both branches with `IO`-returning functions.
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> IO<B>
    where
        B: 'static,
        F: Fn(E) -> IO<B> + Send + Sync + 'static,
        G: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        self.io.chain(move |either| either.fold(&on_left, &on_right))
    }

    /// Recovers from any error with an `IO` that cannot fail.
    pub fn get_or_else<F>(self, on_left: F) -> IO<A>
    where
        F: Fn(E) -> IO<A> + Send + Sync + 'static,
    {
        IO::new(move || match self.run_unsafe() {
            Either::Left(error) => on_left(error).run_unsafe(),
            Either::Right(value) => value,
        })
    }

    /// Recovers from an error with another computation.
    pub fn or_else<E2, F>(self, on_left: F) -> IOEither<E2, A>
    where
        E2: 'static,
        F: Fn(E) -> IOEither<E2, A> + Send + Sync + 'static,
    {
        IOEither::new(move || match self.run_unsafe() {
            Either::Left(error) => on_left(error).run_unsafe(),
            Either::Right(value) => Either::Right(value),
        })
    }

    /// Tries `that` when `self` fails. `that` is only built on failure.
    pub fn alt<F>(self, that: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::new(move || match self.run_unsafe() {
            Either::Left(_) => that().run_unsafe(),
            right @ Either::Right(_) => right,
        })
    }

    // =========================================================================
    // Execution control
    // =========================================================================

    /// Evaluates the computation at most once; see [`IO::memoize`].
    pub fn memoize(self) -> Self
    where
        E: Clone + Send,
        A: Clone + Send,
    {
        self.io.memoize().into()
    }

    /// Sleeps for `duration` before every run.
    pub fn delay(self, duration: Duration) -> Self {
        self.io.delay(duration).into()
    }

    /// Runs the computation while holding a lock; see [`IO::with_lock`].
    pub fn with_lock(self, lock: IO<Unlock>) -> Self {
        self.io.with_lock(lock).into()
    }

    /// Emits the outcome as a `tracing` event: `info` on success, `warn` on
    /// failure.
    pub fn log(self, label: &'static str) -> Self
    where
        E: fmt::Debug,
        A: fmt::Debug,
    {
        Self::new(move || {
            let outcome = self.run_unsafe();
            match &outcome {
                Either::Right(value) => tracing::info!(label, value = ?value, "io either succeeded"),
                Either::Left(error) => tracing::warn!(label, error = ?error, "io either failed"),
            }
            outcome
        })
    }

    /// Runs `action` until `should_retry` rejects its outcome or `policy`
    /// gives up, sleeping between attempts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    /// use fpcomb::effect::IOEither;
    /// use fpcomb::retry::RetryPolicy;
    ///
    /// let flaky = IOEither::retrying(
    ///     RetryPolicy::limit_retries(5),
    ///     |status| {
    ///         if status.iter_number < 2 {
    ///             IOEither::left("busy")
    ///         } else {
    ///             IOEither::right(status.iter_number)
    ///         }
    ///     },
    ///     Either::is_left,
    /// );
    /// assert_eq!(flaky.run_unsafe(), Either::Right(2));
    /// ```
    pub fn retrying<Action, Check>(policy: RetryPolicy, action: Action, should_retry: Check) -> Self
    where
        Action: Fn(&RetryStatus) -> Self + Send + Sync + 'static,
        Check: Fn(&Either<E, A>) -> bool + Send + Sync + 'static,
    {
        IO::retrying(policy, move |status| action(status).io, should_retry).into()
    }
}

impl<E: 'static, A: 'static> IOEither<E, IOEither<E, A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> IOEither<E, A> {
        self.chain(|inner| inner)
    }
}

impl<E: 'static, F: 'static> IOEither<E, F> {
    /// Applies the function to the argument; same as [`IOEither::ap_seq`].
    pub fn ap<B, C>(self, argument: IOEither<E, B>) -> IOEither<E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.ap_seq(argument)
    }

    /// Runs the function computation, then the argument computation only if
    /// the first succeeded.
    pub fn ap_seq<B, C>(self, argument: IOEither<E, B>) -> IOEither<E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Runs both computations, function first, then reports the first `Left`.
    pub fn ap_par<B, C>(self, argument: IOEither<E, B>) -> IOEither<E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2_par(argument, |function, value| function(value))
    }
}

impl<A: 'static> IOEither<Error, A> {
    /// Runs a fallible function, converting its error into [`Error`].
    pub fn try_catch_error<X, F>(function: F) -> Self
    where
        F: Fn() -> Result<A, X> + Send + Sync + 'static,
        X: Into<Error> + 'static,
    {
        Self::try_catch(function, Into::into)
    }

    /// Runs `function`, turning a panic into [`Error::Panic`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::{control::Either, effect::IOEither, Error};
    ///
    /// let guarded = IOEither::try_catch_panic(|| -> i32 { panic!("bad state") });
    /// assert_eq!(guarded.run_unsafe(), Either::Left(Error::Panic("bad state".to_string())));
    /// ```
    pub fn try_catch_panic<F>(function: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(&function)) {
            Ok(value) => Either::Right(value),
            Err(payload) => Either::Left(Error::from_panic(payload.as_ref())),
        })
    }
}

impl<E, A> From<IO<Either<E, A>>> for IOEither<E, A> {
    fn from(io: IO<Either<E, A>>) -> Self {
        Self { io }
    }
}

impl<E, A> Clone for IOEither<E, A> {
    fn clone(&self) -> Self {
        Self {
            io: self.io.clone(),
        }
    }
}

impl<E, A> fmt::Debug for IOEither<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IOEither(<deferred>)")
    }
}
