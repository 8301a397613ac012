//! `ReaderEither`: an environment-dependent computation that may fail.
//!
//! `ReaderEither<R, E, A>` is a [`Reader`] producing an [`Either<E, A>`].
//! The environment is threaded through every step and the first `Left`
//! short-circuits the rest.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::effect::ReaderEither;
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max_items: usize,
//! }
//!
//! fn check(items: usize) -> ReaderEither<Limits, String, usize> {
//!     ReaderEither::asks(|limits: Limits| limits.max_items).chain_either_k(move |max| {
//!         if items <= max { Either::Right(items) } else { Either::Left(format!("{items} > {max}")) }
//!     })
//! }
//!
//! assert_eq!(check(3).run(Limits { max_items: 5 }), Either::Right(3));
//! assert_eq!(check(9).run(Limits { max_items: 5 }), Either::Left("9 > 5".to_string()));
//! ```

mod bind;
mod traverse;

pub use traverse::{
    sequence_array, sequence_record, sequence_t1, sequence_t2, sequence_t3, sequence_t4,
    traverse_array, traverse_array_with_index, traverse_record,
};

use std::fmt;

use super::Reader;
use crate::control::Either;

/// A computation reading `R` that yields an error `E` or a value `A`.
#[must_use = "effects do nothing unless run"]
pub struct ReaderEither<R, E, A> {
    reader: Reader<R, Either<E, A>>,
}

impl<R: 'static, E: 'static, A: 'static> ReaderEither<R, E, A> {
    /// Wraps a function of the environment returning an `Either`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> Either<E, A> + Send + Sync + 'static,
    {
        Reader::new(function).into()
    }

    /// Always succeeds with `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_| Either::Right(value.clone()))
    }

    /// Same as [`ReaderEither::right`].
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
        Self::new(move |_| Either::Left(error.clone()))
    }

    /// Succeeds with a projection of the environment.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::new(move |environment| Either::Right(function(environment)))
    }

    /// Replays an already computed `Either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Send + Sync,
        A: Clone + Send + Sync,
    {
        Reader::of(either).into()
    }

    /// Succeeds with the result of `reader`.
    pub fn from_reader(reader: Reader<R, A>) -> Self {
        reader.map(Either::Right).into()
    }

    /// Fails with the result of `reader`.
    pub fn left_reader(reader: Reader<R, E>) -> Self {
        reader.map(Either::Left).into()
    }

    /// Runs in an environment derived from an outer one.
    pub fn local<R2, F>(self, function: F) -> ReaderEither<R2, E, A>
    where
        R2: 'static,
        F: Fn(R2) -> R + Send + Sync + 'static,
    {
        self.reader.local(function).into()
    }

    /// Supplies the environment.
    pub fn run(&self, environment: R) -> Either<E, A> {
        self.reader.run(environment)
    }

    /// Converts back into the underlying `Reader`.
    pub fn into_reader(self) -> Reader<R, Either<E, A>> {
        self.reader
    }

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.reader.map(move |either| either.map(&function)).into()
    }

    /// Transforms the error.
    pub fn map_left<E2, F>(self, function: F) -> ReaderEither<R, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.reader.map(move |either| either.map_left(&function)).into()
    }

    /// Transforms both branches.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> ReaderEither<R, E2, B>
    where
        E2: 'static,
        B: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.reader
            .map(move |either| either.bimap(&on_left, &on_right))
            .into()
    }

    /// Exchanges error and value.
    pub fn swap(self) -> ReaderEither<R, A, E> {
        self.reader.map(Either::swap).into()
    }

    /// Chains with a strict `Either`-returning function.
    pub fn chain_either_k<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
    {
        self.reader.map(move |either| either.chain(&function)).into()
    }
}

impl<R: Clone + 'static, E: 'static, A: 'static> ReaderEither<R, E, A> {
    /// Sequences a computation that depends on the success value.
    pub fn chain<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderEither<R, E, B> + Send + Sync + 'static,
    {
        ReaderEither::new(move |environment: R| match self.run(environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value).run(environment),
        })
    }

    /// Alias for [`ReaderEither::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderEither<R, E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function` for its outcome, keeping the original value on
    /// success.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> ReaderEither<R, E, B> + Send + Sync + 'static,
    {
        Self::new(move |environment: R| {
            self.run(environment.clone())
                .chain_first(|value| function(value).run(environment))
        })
    }

    /// Combines two successes. `other` is only evaluated if `self`
    /// succeeded.
    pub fn map2<B, C, F>(self, other: ReaderEither<R, E, B>, function: F) -> ReaderEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        ReaderEither::new(move |environment: R| match self.run(environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right(a) => other.run(environment).map(|b| function(a, b)),
        })
    }

    /// Pairs two successes.
    pub fn product<B: 'static>(self, other: ReaderEither<R, E, B>) -> ReaderEither<R, E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Handles both branches with reader-returning functions.
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(E) -> Reader<R, B> + Send + Sync + 'static,
        G: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        self.reader.chain(move |either| either.fold(&on_left, &on_right))
    }

    /// Recovers from any error with a reader that cannot fail.
    pub fn get_or_else<F>(self, on_left: F) -> Reader<R, A>
    where
        F: Fn(E) -> Reader<R, A> + Send + Sync + 'static,
    {
        Reader::new(move |environment: R| match self.run(environment.clone()) {
            Either::Left(error) => on_left(error).run(environment),
            Either::Right(value) => value,
        })
    }

    /// Recovers from an error with another computation.
    pub fn or_else<E2, F>(self, on_left: F) -> ReaderEither<R, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> ReaderEither<R, E2, A> + Send + Sync + 'static,
    {
        ReaderEither::new(move |environment: R| match self.run(environment.clone()) {
            Either::Left(error) => on_left(error).run(environment),
            Either::Right(value) => Either::Right(value),
        })
    }

    /// Tries `that` when `self` fails.
    pub fn alt<F>(self, that: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::new(move |environment: R| match self.run(environment.clone()) {
            Either::Left(_) => that().run(environment),
            right @ Either::Right(_) => right,
        })
    }
}

impl<R: 'static, E: 'static> ReaderEither<R, E, R> {
    /// Succeeds with the environment.
    pub fn ask() -> Self {
        Self::new(Either::Right)
    }
}

impl<R: Clone + 'static, E: 'static, A: 'static> ReaderEither<R, E, ReaderEither<R, E, A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> ReaderEither<R, E, A> {
        self.chain(|inner| inner)
    }
}

impl<R: Clone + 'static, E: 'static, F: 'static> ReaderEither<R, E, F> {
    /// Applies the function to the argument; the argument is only evaluated
    /// if the function succeeded.
    pub fn ap<B, C>(self, argument: ReaderEither<R, E, B>) -> ReaderEither<R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<R, E, A> From<Reader<R, Either<E, A>>> for ReaderEither<R, E, A> {
    fn from(reader: Reader<R, Either<E, A>>) -> Self {
        Self { reader }
    }
}

impl<R, E, A> Clone for ReaderEither<R, E, A> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<R, E, A> fmt::Debug for ReaderEither<R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderEither(<function>)")
    }
}
