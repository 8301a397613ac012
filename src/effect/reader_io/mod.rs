//! `ReaderIO`: an environment-dependent deferred computation.
//!
//! `ReaderIO<R, A>` wraps a function `R -> IO<A>`. Supplying the environment
//! with [`ReaderIO::run`] yields an [`IO`] that still has to be run; nothing
//! happens before that.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::effect::{ReaderIO, IO};
//!
//! let greeting = ReaderIO::asks(|name: String| format!("hello {name}"))
//!     .chain_io_k(|text| IO::new(move || text.len()));
//!
//! let io = greeting.provide("ada".to_string());
//! assert_eq!(io.run_unsafe(), 9);
//! ```

mod traverse;

pub use traverse::{
    sequence_array, sequence_record, sequence_t1, sequence_t2, sequence_t3, sequence_t4,
    traverse_array, traverse_array_with_index, traverse_record,
};

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{IO, Reader};
use crate::typeclass::{Monoid, Semigroup};

/// A computation reading `R` that describes an `IO<A>`.
#[must_use = "effects do nothing unless run"]
pub struct ReaderIO<R, A> {
    reader: Reader<R, IO<A>>,
}

impl<R: 'static, A: 'static> ReaderIO<R, A> {
    /// Wraps a function from the environment to an `IO`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> IO<A> + Send + Sync + 'static,
    {
        Reader::new(function).into()
    }

    /// Lifts a plain value.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::from_io(IO::of(value))
    }

    /// Lifts an `IO` that ignores the environment.
    pub fn from_io(io: IO<A>) -> Self {
        Self::new(move |_| io.clone())
    }

    /// Lifts a `Reader`; the reader runs when the `IO` runs.
    pub fn from_reader(reader: Reader<R, A>) -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::new(move |environment: R| {
            let reader = reader.clone();
            IO::new(move || reader.run(environment.clone()))
        })
    }

    /// Projects the environment.
    pub fn asks<F>(function: F) -> Self
    where
        R: Clone + Send + Sync,
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::from_reader(Reader::new(function))
    }

    /// Runs in an environment derived from an outer one.
    pub fn local<R2, F>(self, function: F) -> ReaderIO<R2, A>
    where
        R2: 'static,
        F: Fn(R2) -> R + Send + Sync + 'static,
    {
        self.reader.local(function).into()
    }

    /// Supplies the environment, returning the described `IO`.
    pub fn run(&self, environment: R) -> IO<A> {
        self.reader.run(environment)
    }

    /// Same as [`ReaderIO::run`], consuming the computation.
    pub fn provide(self, environment: R) -> IO<A> {
        self.run(environment)
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.reader
            .map(move |io| {
                let function = Arc::clone(&function);
                io.map(move |value| function(value))
            })
            .into()
    }

    /// Chains with an `IO`-returning function that ignores the environment.
    pub fn chain_io_k<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.reader
            .map(move |io| {
                let function = Arc::clone(&function);
                io.chain(move |value| function(value))
            })
            .into()
    }
}

impl<R: Clone + Send + Sync + 'static, A: 'static> ReaderIO<R, A> {
    /// Sequences a computation that depends on the produced value; both see
    /// the same environment.
    pub fn chain<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIO<R, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderIO::new(move |environment: R| {
            let function = Arc::clone(&function);
            let shared = environment.clone();
            self.run(environment)
                .chain(move |value| function(value).run(shared.clone()))
        })
    }

    /// Alias for [`ReaderIO::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIO<R, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Combines the values of two computations run in order.
    pub fn map2<B, C, F>(self, other: ReaderIO<R, B>, function: F) -> ReaderIO<R, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderIO::new(move |environment: R| {
            let function = Arc::clone(&function);
            self.run(environment.clone())
                .map2(other.run(environment), move |a, b| function(a, b))
        })
    }

    /// Pairs the values of two computations.
    pub fn product<B: 'static>(self, other: ReaderIO<R, B>) -> ReaderIO<R, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates the computation at most once.
    ///
    /// The first run fixes the value; later runs return it whatever
    /// environment they are given.
    pub fn memoize(self) -> Self
    where
        A: Clone + Send,
    {
        let cache: Arc<Mutex<Option<A>>> = Arc::new(Mutex::new(None));
        Self::new(move |environment: R| {
            let cache = Arc::clone(&cache);
            let computation = self.clone();
            IO::new(move || {
                let mut slot = cache.lock();
                if let Some(value) = slot.as_ref() {
                    return value.clone();
                }
                let value = computation.run(environment.clone()).run_unsafe();
                *slot = Some(value.clone());
                value
            })
        })
    }
}

impl<R: 'static> ReaderIO<R, R> {
    /// The environment itself.
    pub fn ask() -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::new(IO::of)
    }
}

impl<R: Clone + Send + Sync + 'static, F: 'static> ReaderIO<R, F> {
    /// Applies the produced function to the argument's value.
    pub fn ap<B, C>(self, argument: ReaderIO<R, B>) -> ReaderIO<R, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<R, A> From<Reader<R, IO<A>>> for ReaderIO<R, A> {
    fn from(reader: Reader<R, IO<A>>) -> Self {
        Self { reader }
    }
}

impl<R, A> Clone for ReaderIO<R, A> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<R, A> fmt::Debug for ReaderIO<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderIO(<function>)")
    }
}

impl<R: Clone + Send + Sync + 'static, A: Semigroup + 'static> Semigroup for ReaderIO<R, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<R: Clone + Send + Sync + 'static, A: Monoid + 'static> Monoid for ReaderIO<R, A> {
    fn empty() -> Self {
        Self::from_io(IO::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn nothing_runs_until_io_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let shared = Arc::clone(&calls);
        let counted = ReaderIO::asks(move |step: usize| shared.fetch_add(step, Ordering::SeqCst));
        let io = counted.provide(5);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        io.run_unsafe();
        io.run_unsafe();
        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }

    #[rstest]
    fn chain_and_map2_share_environment() {
        let ask = ReaderIO::<i32, i32>::ask;
        let chained = ask().chain(|n| ReaderIO::asks(move |m: i32| n + m));
        assert_eq!(chained.run(4).run_unsafe(), 8);
        assert_eq!(ask().product(ReaderIO::of("x")).run(1).run_unsafe(), (1, "x"));
        let add = ReaderIO::asks(|n: i32| move |x: i32| x * n);
        assert_eq!(add.ap(ask()).run(3).run_unsafe(), 9);
    }

    #[rstest]
    fn local_and_lifting() {
        let length = ReaderIO::from_reader(Reader::asks(|text: String| text.len()))
            .local(|n: u8| "x".repeat(usize::from(n)));
        assert_eq!(length.run(3).run_unsafe(), 3);
        let io_only: ReaderIO<(), i32> = ReaderIO::from_io(IO::of(2)).map(|n| n + 1);
        assert_eq!(io_only.run(()).run_unsafe(), 3);
    }

    #[rstest]
    fn memoize_ignores_later_environments() {
        let calls = Arc::new(AtomicUsize::new(0));
        let shared = Arc::clone(&calls);
        let memoized = ReaderIO::asks(move |n: i32| {
            shared.fetch_add(1, Ordering::SeqCst);
            n * 2
        })
        .memoize();
        assert_eq!(memoized.run(1).run_unsafe(), 2);
        assert_eq!(memoized.run(50).run_unsafe(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn monoid_combines_values() {
        let total = ReaderIO::asks(Sum).combine(ReaderIO::of(Sum(2)));
        assert_eq!(total.run(3).run_unsafe(), Sum(5));
        assert_eq!(ReaderIO::<i32, Sum<i32>>::empty().run(3).run_unsafe(), Sum(0));
    }
}
