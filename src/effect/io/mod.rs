//! IO - a deferred computation.
//!
//! `IO<A>` describes a computation producing an `A`, possibly with side
//! effects. Nothing happens until [`IO::run_unsafe`] is called, and every
//! call runs the whole description again.
//!
//! Unlike a one-shot thunk, an `IO` is a shared `Fn` behind an `Arc`: it is
//! `Clone + Send + Sync` and can be run any number of times, from any
//! thread. Use [`IO::memoize`] to evaluate it at most once.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use fpcomb::effect::IO;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//!
//! let next = IO::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1)
//!     .map(|n| n * 10);
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//! assert_eq!(next.run_unsafe(), 10);
//! assert_eq!(next.run_unsafe(), 20);
//! ```

mod bind;
mod traverse;

pub use traverse::{
    sequence_array, sequence_record, sequence_t1, sequence_t2, sequence_t3, sequence_t4,
    traverse_array, traverse_array_with_index, traverse_record,
};

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;

use super::lock::{Unlock, UnlockGuard};
use crate::error::Error;
use crate::retry::{self, RetryPolicy, RetryStatus};
use crate::typeclass::{Monoid, Semigroup};

/// A deferred, re-runnable computation producing an `A`.
#[must_use = "effects do nothing unless run"]
pub struct IO<A> {
    run_function: Arc<dyn Fn() -> A + Send + Sync>,
}

impl<A: 'static> IO<A> {
    /// Wraps a closure. The closure runs on every [`IO::run_unsafe`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(action),
        }
    }

    /// Lifts a plain value; each run yields a clone of it.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move || value.clone())
    }

    /// Runs the computation.
    ///
    /// Named `unsafe` in the functional sense: this is where the described
    /// side effects actually happen.
    pub fn run_unsafe(&self) -> A {
        (self.run_function)()
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Sequences a computation that depends on the produced value.
    pub fn chain<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Alias for [`IO::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Alias for [`IO::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function`'s effect after this one and keeps this one's value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> IO<B> + Send + Sync + 'static,
    {
        Self::new(move || {
            let value = self.run_unsafe();
            function(&value).run_unsafe();
            value
        })
    }

    /// Runs both computations, function first, and combines their values.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        IO::new(move || {
            let first = self.run_unsafe();
            let second = other.run_unsafe();
            function(first, second)
        })
    }

    /// Pairs the values of two computations.
    pub fn product<B: 'static>(self, other: IO<B>) -> IO<(A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Sequences two computations, keeping the first value.
    pub fn ap_first<B: 'static>(self, other: IO<B>) -> Self {
        self.map2(other, |a, _| a)
    }

    /// Sequences two computations, keeping the second value.
    pub fn ap_second<B: 'static>(self, other: IO<B>) -> IO<B> {
        self.map2(other, |_, b| b)
    }

    /// Evaluates the computation at most once.
    ///
    /// The first run evaluates and caches the value while holding a mutex,
    /// so concurrent first runs wait for that evaluation and every run
    /// returns a clone of the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use fpcomb::effect::IO;
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let once = IO::new(move || counter.fetch_add(1, Ordering::SeqCst)).memoize();
    ///
    /// assert_eq!(once.run_unsafe(), 0);
    /// assert_eq!(once.run_unsafe(), 0);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    pub fn memoize(self) -> Self
    where
        A: Clone + Send,
    {
        let cache: Arc<Mutex<Option<A>>> = Arc::new(Mutex::new(None));
        Self::new(move || {
            let mut slot = cache.lock();
            if let Some(value) = slot.as_ref() {
                return value.clone();
            }
            let value = self.run_unsafe();
            *slot = Some(value.clone());
            value
        })
    }

    /// Sleeps for `duration` before every run.
    pub fn delay(self, duration: Duration) -> Self {
        Self::new(move || {
            std::thread::sleep(duration);
            self.run_unsafe()
        })
    }

    /// Runs the computation between acquiring and releasing a lock.
    ///
    /// `lock` acquires the lock and yields the action that releases it. The
    /// release runs after the computation, also when the computation
    /// panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use fpcomb::effect::{IO, Unlock};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let (for_lock, for_body) = (Arc::clone(&log), Arc::clone(&log));
    ///
    /// let lock = IO::new(move || {
    ///     for_lock.lock().unwrap().push("lock");
    ///     let for_unlock = Arc::clone(&for_lock);
    ///     Box::new(move || for_unlock.lock().unwrap().push("unlock")) as Unlock
    /// });
    /// let body = IO::new(move || for_body.lock().unwrap().push("body"));
    ///
    /// body.with_lock(lock).run_unsafe();
    /// assert_eq!(*log.lock().unwrap(), vec!["lock", "body", "unlock"]);
    /// ```
    pub fn with_lock(self, lock: IO<Unlock>) -> Self {
        Self::new(move || {
            let _guard = UnlockGuard::new(lock.run_unsafe());
            self.run_unsafe()
        })
    }

    /// Turns a panic during the run into a value computed by `handler`.
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: Fn(Error) -> A + Send + Sync + 'static,
    {
        Self::new(move || {
            catch_unwind(AssertUnwindSafe(|| self.run_unsafe()))
                .unwrap_or_else(|payload| handler(Error::from_panic(payload.as_ref())))
        })
    }

    /// Emits the produced value as a `tracing` info event.
    pub fn log(self, label: &'static str) -> Self
    where
        A: fmt::Debug,
    {
        Self::new(move || {
            let value = self.run_unsafe();
            tracing::info!(label, value = ?value, "io value");
            value
        })
    }

    /// Runs `action` until `should_retry` rejects its value or `policy`
    /// gives up, sleeping between attempts.
    pub fn retrying<Action, Check>(policy: RetryPolicy, action: Action, should_retry: Check) -> Self
    where
        Action: Fn(&RetryStatus) -> Self + Send + Sync + 'static,
        Check: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Self::new(move || {
            retry::retrying(&policy, |status| action(status).run_unsafe(), &should_retry)
        })
    }
}

impl<A: 'static> IO<IO<A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> IO<A> {
        self.chain(|inner| inner)
    }
}

impl<F: 'static> IO<F> {
    /// Applies the function produced by `self` to the value produced by
    /// `argument`, running `self` first.
    pub fn ap<B, C>(self, argument: IO<B>) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Same as [`IO::ap`]; `IO` cannot fail, so both computations always run,
    /// function first.
    pub fn ap_seq<B, C>(self, argument: IO<B>) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.ap(argument)
    }

    /// Same as [`IO::ap`]. Provided for symmetry with the failing types.
    pub fn ap_par<B, C>(self, argument: IO<B>) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.ap(argument)
    }
}

impl IO<SystemTime> {
    /// Reads the wall clock on every run.
    pub fn now() -> Self {
        Self::new(SystemTime::now)
    }
}

impl IO<()> {
    /// Sleeps for `duration`.
    pub fn sleep(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

impl<A: Semigroup + 'static> Semigroup for IO<A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<A: Monoid + 'static> Monoid for IO<A> {
    fn empty() -> Self {
        Self::new(A::empty)
    }
}
