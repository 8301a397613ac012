//! Do-notation for `Either`.
//!
//! A scope value is threaded through a chain of named bindings. Each binding
//! computes a new field and stores it with a setter, so a pipeline reads as a
//! list of steps instead of nested closures.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! struct Scope {
//!     user: String,
//!     age: u32,
//!     adult: bool,
//! }
//!
//! let result: Either<String, Scope> = Either::do_(Scope::default())
//!     .bind(|scope, user| Scope { user, ..scope }, |_| Either::Right("ada".to_string()))
//!     .bind(|scope, age| Scope { age, ..scope }, |scope| {
//!         if scope.user.is_empty() { Either::Left("no user".to_string()) } else { Either::Right(36) }
//!     })
//!     .let_(|scope, adult| Scope { adult, ..scope }, |scope| scope.age >= 18);
//!
//! assert_eq!(
//!     result,
//!     Either::Right(Scope { user: "ada".to_string(), age: 36, adult: true })
//! );
//! ```

use super::Either;

impl<E, S> Either<E, S> {
    /// Starts a do-notation block with an initial scope.
    #[inline]
    pub const fn do_(scope: S) -> Self {
        Self::Right(scope)
    }

    /// Turns the current value into a scope.
    pub fn bind_to<S2, F>(self, setter: F) -> Either<E, S2>
    where
        F: FnOnce(S) -> S2,
    {
        self.map(setter)
    }

    /// Runs a computation that depends on the scope and stores its result.
    pub fn bind<S2, T, Setter, F>(self, setter: Setter, function: F) -> Either<E, S2>
    where
        Setter: FnOnce(S, T) -> S2,
        F: FnOnce(&S) -> Either<E, T>,
    {
        self.chain(|scope| function(&scope).map(|value| setter(scope, value)))
    }

    /// Stores the result of a pure computation on the scope.
    pub fn let_<S2, T, Setter, F>(self, setter: Setter, function: F) -> Either<E, S2>
    where
        Setter: FnOnce(S, T) -> S2,
        F: FnOnce(&S) -> T,
    {
        self.map(|scope| {
            let value = function(&scope);
            setter(scope, value)
        })
    }

    /// Stores a constant in the scope.
    pub fn let_to<S2, T, Setter>(self, setter: Setter, value: T) -> Either<E, S2>
    where
        Setter: FnOnce(S, T) -> S2,
    {
        self.map(|scope| setter(scope, value))
    }

    /// Stores the result of an independent computation.
    ///
    /// Unlike [`Either::bind`], `computation` does not see the scope.
    pub fn ap_s<S2, T, Setter>(self, setter: Setter, computation: Either<E, T>) -> Either<E, S2>
    where
        Setter: FnOnce(S, T) -> S2,
    {
        self.map2(computation, setter)
    }
}
