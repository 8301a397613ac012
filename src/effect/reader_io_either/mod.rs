//! `ReaderIOEither`: an environment-dependent, deferred computation that may
//! fail.
//!
//! `ReaderIOEither<R, E, A>` wraps a function `R -> IOEither<E, A>`: the
//! environment is supplied with [`ReaderIOEither::run`], the resulting
//! [`IOEither`] still has to be run, and a `Left` short-circuits the rest of
//! the chain. Every combinator is the [`IOEither`] one, lifted under the
//! environment.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::effect::ReaderIOEither;
//!
//! #[derive(Clone)]
//! struct Config {
//!     base_url: String,
//! }
//!
//! fn endpoint(path: &'static str) -> ReaderIOEither<Config, String, String> {
//!     ReaderIOEither::asks(|config: Config| config.base_url).chain_either_k(move |base| {
//!         if base.starts_with("https://") {
//!             Either::Right(format!("{base}/{path}"))
//!         } else {
//!             Either::Left(format!("insecure base url {base}"))
//!         }
//!     })
//! }
//!
//! let config = Config { base_url: "https://api.example.com".to_string() };
//! let url = endpoint("users").run(config).run_unsafe();
//! assert_eq!(url, Either::Right("https://api.example.com/users".to_string()));
//! ```

mod bind;
mod bracket;
mod monoid;
#[cfg(feature = "optics")]
mod optics;
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
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::lock::Unlock;
use super::{IO, IOEither, Reader, ReaderEither, ReaderIO};
use crate::control::Either;
use crate::retry::{RetryPolicy, RetryStatus};

/// A computation reading `R` that describes an `IOEither<E, A>`.
#[must_use = "effects do nothing unless run"]
pub struct ReaderIOEither<R, E, A> {
    reader: Reader<R, IOEither<E, A>>,
}

impl<R: 'static, E: 'static, A: 'static> ReaderIOEither<R, E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a function from the environment to an `IOEither`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> IOEither<E, A> + Send + Sync + 'static,
    {
        Reader::new(function).into()
    }

    /// Always succeeds with `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::from_io_either(IOEither::right(value))
    }

    /// Same as [`ReaderIOEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::right(value)
    }

    /// Always fails with `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::from_io_either(IOEither::left(error))
    }

    /// Replays an already computed `Either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Send + Sync,
        A: Clone + Send + Sync,
    {
        Self::from_io_either(IOEither::from_either(either))
    }

    /// Succeeds with the value produced by `io`.
    pub fn from_io(io: IO<A>) -> Self {
        Self::from_io_either(IOEither::right_io(io))
    }

    /// Lifts an `IOEither` that ignores the environment.
    pub fn from_io_either(io_either: IOEither<E, A>) -> Self {
        Self::new(move |_| io_either.clone())
    }

    /// Succeeds with the value produced by `reader_io`.
    pub fn from_reader_io(reader_io: ReaderIO<R, A>) -> Self {
        Self::new(move |environment| IOEither::right_io(reader_io.run(environment)))
    }

    /// Runs in an environment derived from an outer one.
    pub fn local<R2, F>(self, function: F) -> ReaderIOEither<R2, E, A>
    where
        R2: 'static,
        F: Fn(R2) -> R + Send + Sync + 'static,
    {
        self.reader.local(function).into()
    }

    /// Supplies the environment, returning the described `IOEither`.
    pub fn run(&self, environment: R) -> IOEither<E, A> {
        self.reader.run(environment)
    }

    /// Same as [`ReaderIOEither::run`], consuming the computation.
    pub fn provide(self, environment: R) -> IOEither<E, A> {
        self.run(environment)
    }

    /// Applies `transform` to the `IOEither` described for every
    /// environment.
    fn lift<E2, B, F>(self, transform: F) -> ReaderIOEither<R, E2, B>
    where
        E2: 'static,
        B: 'static,
        F: Fn(IOEither<E, A>) -> IOEither<E2, B> + Send + Sync + 'static,
    {
        self.reader.map(transform).into()
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.lift(move |io_either| {
            let function = Arc::clone(&function);
            io_either.map(move |value| function(value))
        })
    }

    /// Transforms the error.
    pub fn map_left<E2, F>(self, function: F) -> ReaderIOEither<R, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.lift(move |io_either| {
            let function = Arc::clone(&function);
            io_either.map_left(move |error| function(error))
        })
    }

    /// Transforms both branches.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> ReaderIOEither<R, E2, B>
    where
        E2: 'static,
        B: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_left(on_left).map(on_right)
    }

    /// Exchanges error and value.
    pub fn swap(self) -> ReaderIOEither<R, A, E> {
        self.lift(IOEither::swap)
    }

    // =========================================================================
    // Kleisli helpers over lower layers
    // =========================================================================

    /// Chains with a strict `Either`-returning function.
    pub fn chain_either_k<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.lift(move |io_either| {
            let function = Arc::clone(&function);
            io_either.chain_either_k(move |value| function(value))
        })
    }

    /// Chains with an infallible `IO`-returning function.
    pub fn chain_io_k<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.lift(move |io_either| {
            let function = Arc::clone(&function);
            io_either.chain_io_k(move |value| function(value))
        })
    }

    /// Chains with an `IOEither`-returning function that ignores the
    /// environment.
    pub fn chain_io_either_k<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.lift(move |io_either| {
            let function = Arc::clone(&function);
            io_either.chain(move |value| function(value))
        })
    }

    // =========================================================================
    // Execution control
    // =========================================================================

    /// Sleeps for `duration` before every run.
    pub fn delay(self, duration: Duration) -> Self {
        self.lift(move |io_either| io_either.delay(duration))
    }

    /// Runs the described computation while holding the lock acquired by
    /// `lock`; see [`IO::with_lock`].
    pub fn with_lock(self, lock: IO<Unlock>) -> Self {
        self.lift(move |io_either| io_either.with_lock(lock.clone()))
    }

    /// Emits the outcome as a `tracing` event; see [`IOEither::log`].
    pub fn log(self, label: &'static str) -> Self
    where
        E: fmt::Debug,
        A: fmt::Debug,
    {
        self.lift(move |io_either| io_either.log(label))
    }
}

impl<R, E, A> ReaderIOEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    /// Succeeds with a projection of the environment.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::from_reader(Reader::new(function))
    }

    /// Succeeds with the result of `reader`, evaluated when the `IOEither`
    /// runs.
    pub fn from_reader(reader: Reader<R, A>) -> Self {
        Self::new(move |environment: R| IOEither::right_io(ReaderIO::from_reader(reader.clone()).run(environment)))
    }

    /// Fails with the result of `reader`.
    pub fn left_reader(reader: Reader<R, E>) -> Self {
        Self::new(move |environment: R| IOEither::left_io(ReaderIO::from_reader(reader.clone()).run(environment)))
    }

    /// Lifts a `ReaderEither`.
    pub fn from_reader_either(reader_either: ReaderEither<R, E, A>) -> Self {
        Self::new(move |environment: R| {
            let reader_either = reader_either.clone();
            IOEither::new(move || reader_either.run(environment.clone()))
        })
    }

    /// Runs a fallible function of the environment on every run, mapping
    /// its error with `on_error`.
    pub fn try_catch<X, F, G>(function: F, on_error: G) -> Self
    where
        F: Fn(R) -> Result<A, X> + Send + Sync + 'static,
        G: Fn(X) -> E + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let on_error = Arc::new(on_error);
        Self::new(move |environment: R| {
            let function = Arc::clone(&function);
            let on_error = Arc::clone(&on_error);
            IOEither::try_catch(move || function(environment.clone()), move |error| on_error(error))
        })
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a computation that depends on the success value; both see
    /// the same environment.
    pub fn chain<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIOEither<R, E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderIOEither::new(move |environment: R| {
            let function = Arc::clone(&function);
            let shared = environment.clone();
            self.run(environment)
                .chain(move |value| function(value).run(shared.clone()))
        })
    }

    /// Alias for [`ReaderIOEither::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIOEither<R, E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Alias for [`ReaderIOEither::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIOEither<R, E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function` for its outcome, keeping the original value on
    /// success.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> ReaderIOEither<R, E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move |environment: R| {
            let function = Arc::clone(&function);
            let shared = environment.clone();
            self.run(environment)
                .chain_first(move |value| function(value).run(shared.clone()))
        })
    }

    /// Chains with a `Reader`-returning function; the reader cannot fail.
    pub fn chain_reader_k<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        self.chain(move |value| ReaderIOEither::from_reader(function(value)))
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two successes. `other` runs only if `self` succeeded.
    pub fn map2<B, C, F>(self, other: ReaderIOEither<R, E, B>, function: F) -> ReaderIOEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderIOEither::new(move |environment: R| {
            let first = self.run(environment.clone());
            let other = other.clone();
            let function = Arc::clone(&function);
            IOEither::new(move || match first.run_unsafe() {
                Either::Left(error) => Either::Left(error),
                Either::Right(a) => other.run(environment.clone()).run_unsafe().map(|b| function(a, b)),
            })
        })
    }

    /// Combines two successes after running both computations, in order.
    pub fn map2_par<B, C, F>(self, other: ReaderIOEither<R, E, B>, function: F) -> ReaderIOEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderIOEither::new(move |environment: R| {
            let function = Arc::clone(&function);
            self.run(environment.clone())
                .map2_par(other.run(environment), move |a, b| function(a, b))
        })
    }

    /// Pairs two successes.
    pub fn product<B: 'static>(self, other: ReaderIOEither<R, E, B>) -> ReaderIOEither<R, E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    // =========================================================================
    // Elimination and recovery
    // =========================================================================

    /// Handles both branches with `ReaderIO`-returning functions.
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> ReaderIO<R, B>
    where
        B: 'static,
        F: Fn(E) -> ReaderIO<R, B> + Send + Sync + 'static,
        G: Fn(A) -> ReaderIO<R, B> + Send + Sync + 'static,
    {
        let on_left = Arc::new(on_left);
        let on_right = Arc::new(on_right);
        ReaderIO::new(move |environment: R| {
            let on_left = Arc::clone(&on_left);
            let on_right = Arc::clone(&on_right);
            let for_left = environment.clone();
            let for_right = environment.clone();
            self.run(environment).fold(
                move |error| on_left(error).run(for_left.clone()),
                move |value| on_right(value).run(for_right.clone()),
            )
        })
    }

    /// Recovers from any error with a computation that cannot fail.
    pub fn get_or_else<F>(self, on_left: F) -> ReaderIO<R, A>
    where
        F: Fn(E) -> ReaderIO<R, A> + Send + Sync + 'static,
    {
        let on_left = Arc::new(on_left);
        ReaderIO::new(move |environment: R| {
            let on_left = Arc::clone(&on_left);
            let shared = environment.clone();
            self.run(environment)
                .get_or_else(move |error| on_left(error).run(shared.clone()))
        })
    }

    /// Recovers from an error with another computation.
    pub fn or_else<E2, F>(self, on_left: F) -> ReaderIOEither<R, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> ReaderIOEither<R, E2, A> + Send + Sync + 'static,
    {
        let on_left = Arc::new(on_left);
        ReaderIOEither::new(move |environment: R| {
            let on_left = Arc::clone(&on_left);
            let shared = environment.clone();
            self.run(environment)
                .or_else(move |error| on_left(error).run(shared.clone()))
        })
    }

    /// Tries `that` when `self` fails. `that` is only built on failure.
    pub fn alt<F>(self, that: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        let that = Arc::new(that);
        Self::new(move |environment: R| {
            let that = Arc::clone(&that);
            let shared = environment.clone();
            self.run(environment)
                .alt(move || that().run(shared.clone()))
        })
    }

    // =========================================================================
    // Execution control
    // =========================================================================

    /// Evaluates the computation at most once.
    ///
    /// The first run fixes the outcome; later runs return it whatever
    /// environment they are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    /// use fpcomb::effect::ReaderIOEither;
    ///
    /// let first_environment = ReaderIOEither::<i32, String, i32>::ask().memoize();
    /// assert_eq!(first_environment.run(1).run_unsafe(), Either::Right(1));
    /// assert_eq!(first_environment.run(2).run_unsafe(), Either::Right(1));
    /// ```
    pub fn memoize(self) -> Self
    where
        E: Clone + Send,
        A: Clone + Send,
    {
        let cache: Arc<Mutex<Option<Either<E, A>>>> = Arc::new(Mutex::new(None));
        Self::new(move |environment: R| {
            let cache = Arc::clone(&cache);
            let computation = self.clone();
            IOEither::new(move || {
                let mut slot = cache.lock();
                if let Some(outcome) = slot.as_ref() {
                    return outcome.clone();
                }
                let outcome = computation.run(environment.clone()).run_unsafe();
                *slot = Some(outcome.clone());
                outcome
            })
        })
    }

    /// Runs `action` until `should_retry` rejects its outcome or `policy`
    /// gives up; see [`IOEither::retrying`].
    pub fn retrying<Action, Check>(policy: RetryPolicy, action: Action, should_retry: Check) -> Self
    where
        Action: Fn(&RetryStatus) -> Self + Send + Sync + 'static,
        Check: Fn(&Either<E, A>) -> bool + Send + Sync + 'static,
    {
        let action = Arc::new(action);
        let should_retry = Arc::new(should_retry);
        Self::new(move |environment: R| {
            let action = Arc::clone(&action);
            let should_retry = Arc::clone(&should_retry);
            IOEither::retrying(
                policy.clone(),
                move |status| action(status).run(environment.clone()),
                move |outcome| should_retry(outcome),
            )
        })
    }
}

impl<R, E> ReaderIOEither<R, E, R>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Succeeds with the environment.
    pub fn ask() -> Self {
        Self::new(IOEither::right)
    }
}

impl<R, E, A> ReaderIOEither<R, E, ReaderIOEither<R, E, A>>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    /// Removes one level of nesting.
    pub fn flatten(self) -> ReaderIOEither<R, E, A> {
        self.chain(|inner| inner)
    }
}

impl<R, E, F> ReaderIOEither<R, E, F>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    F: 'static,
{
    /// Same as [`ReaderIOEither::ap_seq`].
    pub fn ap<B, C>(self, argument: ReaderIOEither<R, E, B>) -> ReaderIOEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.ap_seq(argument)
    }

    /// Runs the function computation, then the argument computation only if
    /// the first succeeded.
    pub fn ap_seq<B, C>(self, argument: ReaderIOEither<R, E, B>) -> ReaderIOEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Runs both computations, function first, then reports the first
    /// `Left`.
    pub fn ap_par<B, C>(self, argument: ReaderIOEither<R, E, B>) -> ReaderIOEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2_par(argument, |function, value| function(value))
    }
}

impl<R, E, A> From<Reader<R, IOEither<E, A>>> for ReaderIOEither<R, E, A> {
    fn from(reader: Reader<R, IOEither<E, A>>) -> Self {
        Self { reader }
    }
}

impl<R, E, A> Clone for ReaderIOEither<R, E, A> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<R, E, A> fmt::Debug for ReaderIOEither<R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderIOEither(<function>)")
    }
}
