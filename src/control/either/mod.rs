//! Either - a value that is an error (`Left`) or a success (`Right`).
//!
//! `Either<E, A>` is the innermost layer of every failure-carrying effect in
//! this crate: `IOEither`, `ReaderEither`, `ReaderIOEither` and
//! `StateReaderIOEither` all eventually produce one.
//!
//! By convention `Left` carries the error and `Right` the value. Every
//! combinator that touches the value (`map`, `chain`, `ap`, ...) leaves a
//! `Left` untouched and never calls its function on it.
//!
//! # Laws
//!
//! - Functor identity: `e.map(|x| x) == e`
//! - Functor composition: `e.map(f).map(g) == e.map(|x| g(f(x)))`
//! - Left identity: `Either::of(a).chain(f) == f(a)`
//! - Right identity: `m.chain(Either::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     Either::try_catch(|| input.parse::<i32>(), |error| error.to_string())
//! }
//!
//! let doubled = parse("21").map(|value| value * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").map(|value| value * 2);
//! assert!(failed.is_left());
//! ```

mod bind;
mod monoid;
#[cfg(feature = "optics")]
mod optics;
mod traverse;

pub use monoid::{alt_monoid, alternative_monoid};
pub use traverse::{
    sequence_array, sequence_record, sequence_t1, sequence_t2, sequence_t3, sequence_t4,
    traverse_array, traverse_array_with_index, traverse_record,
};

use std::fmt;

use crate::error::Error;

/// A value that is either an error (`Left`) or a success (`Right`).
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// let failure: Either<String, i32> = Either::left("boom".to_string());
///
/// assert_eq!(success.get_or_else(|_| 0), 42);
/// assert_eq!(failure.get_or_else(|error| error.len() as i32), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Either` may be a `Left` that should be handled"]
pub enum Either<E, A> {
    /// The failure branch.
    Left(E),
    /// The success branch.
    Right(A),
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a failure.
    #[inline]
    pub const fn left(error: E) -> Self {
        Self::Left(error)
    }

    /// Creates a success.
    #[inline]
    pub const fn right(value: A) -> Self {
        Self::Right(value)
    }

    /// Lifts a plain value. Same as [`Either::right`].
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Right(value)
    }

    /// Converts an `Option`, using `on_none` to produce the error for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), || "none"), Either::Right(1));
    /// assert_eq!(Either::from_option(None::<i32>, || "none"), Either::Left("none"));
    /// ```
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        option.map_or_else(|| Self::Left(on_none()), Self::Right)
    }

    /// Keeps `value` when `predicate` holds, otherwise turns it into an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    ///
    /// let positive = |n: i32| Either::from_predicate(n, |n| *n > 0, |n| format!("{n} <= 0"));
    /// assert_eq!(positive(3), Either::Right(3));
    /// assert_eq!(positive(-1), Either::Left("-1 <= 0".to_string()));
    /// ```
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        if predicate(&value) {
            Self::Right(value)
        } else {
            Self::Left(on_false(value))
        }
    }

    /// Runs a fallible function, mapping its error with `on_error`.
    pub fn try_catch<X, F, G>(function: F, on_error: G) -> Self
    where
        F: FnOnce() -> Result<A, X>,
        G: FnOnce(X) -> E,
    {
        match function() {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(on_error(error)),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows both branches.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the error, if any, by reference.
    #[inline]
    pub const fn left_ref(&self) -> Option<&E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the value, if any, by reference.
    #[inline]
    pub const fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Discards the error.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Discards the value.
    #[inline]
    pub fn left_option(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Converts into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    /// Returns `true` if this is a success satisfying `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the error.
    pub fn map_left<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms both branches.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> Either<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(on_left(error)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Exchanges the two branches.
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a computation that depends on the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(Either::of(8).chain(halve).chain(halve), Either::Right(2));
    /// assert_eq!(Either::of(6).chain(halve).chain(halve), Either::Left("3 is odd".to_string()));
    /// ```
    pub fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.chain(function)
    }

    /// Alias for [`Either::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.chain(function)
    }

    /// Runs `function` for its outcome but keeps the original value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Self::Left(error),
            Self::Right(value) => match function(&value) {
                Either::Left(error) => Self::Left(error),
                Either::Right(_) => Self::Right(value),
            },
        }
    }

    /// Chains with a function returning an `Option`, failing with `on_none`.
    pub fn chain_option_k<B, F, G>(self, on_none: G, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Option<B>,
        G: FnOnce() -> E,
    {
        self.chain(|value| Either::from_option(function(value), on_none))
    }

    /// Fails with `on_false` when the value does not satisfy `predicate`.
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        self.chain(|value| Self::from_predicate(value, predicate, on_false))
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two successes with `function`; the first failure wins.
    pub fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }

    /// Pairs two successes.
    pub fn product<B>(self, other: Either<E, B>) -> Either<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function held in `self` to the value held in `argument`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    ///
    /// let add_one: Either<String, fn(i32) -> i32> = Either::of(|n| n + 1);
    /// assert_eq!(add_one.ap(Either::of(41)), Either::Right(42));
    /// ```
    pub fn ap<B, C>(self, argument: Either<E, B>) -> Either<E, C>
    where
        A: FnOnce(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Sequences two computations, keeping the first value.
    pub fn ap_first<B>(self, other: Either<E, B>) -> Self {
        self.map2(other, |a, _| a)
    }

    /// Sequences two computations, keeping the second value.
    pub fn ap_second<B>(self, other: Either<E, B>) -> Either<E, B> {
        self.map2(other, |_, b| b)
    }

    // =========================================================================
    // Elimination and recovery
    // =========================================================================

    /// Collapses both branches into one value.
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> B
    where
        F: FnOnce(E) -> B,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the value, or computes one from the error.
    pub fn get_or_else<F>(self, on_left: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => value,
        }
    }

    /// Recovers from an error with another computation.
    pub fn or_else<E2, F>(self, on_left: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> Either<E2, A>,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns `self` if it succeeded, otherwise evaluates `that`.
    pub fn alt<F>(self, that: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => that(),
            right @ Self::Right(_) => right,
        }
    }
}

impl<E, A> Either<E, Either<E, A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Either<E, A> {
        self.chain(|inner| inner)
    }
}

impl<A> Either<Error, A> {
    /// Runs a fallible function, converting its error into [`Error`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::{control::Either, Error};
    ///
    /// let parsed = Either::try_catch_error(|| "12".parse::<u8>().map_err(|e| e.to_string()));
    /// assert_eq!(parsed, Either::Right(12));
    /// ```
    pub fn try_catch_error<X, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<A, X>,
        X: Into<Error>,
    {
        Self::try_catch(function, Into::into)
    }
}

// =============================================================================
// Conversions and formatting
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left({error})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}
