//! Value-level monoid instances.
//!
//! [`Monoid`] is a type-level capability: one identity per type. Some monoids
//! over effects need an identity that is only known at runtime, such as the
//! alt monoid whose identity is a caller-supplied failure. [`MonoidInstance`]
//! carries `empty` and `concat` as values so those can be built and passed
//! around like any other value.

use std::fmt;
use std::sync::Arc;

use super::{Monoid, Semigroup};

type EmptyFunction<T> = Arc<dyn Fn() -> T + Send + Sync>;
type ConcatFunction<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;

/// A monoid passed around as a value.
///
/// # Laws
///
/// ```text
/// m.concat(m.empty(), a) == a
/// m.concat(a, m.empty()) == a
/// m.concat(m.concat(a, b), c) == m.concat(a, m.concat(b, c))
/// ```
///
/// # Examples
///
/// ```rust
/// use fpcomb::typeclass::{MonoidInstance, Sum};
///
/// let sum = MonoidInstance::<Sum<i32>>::from_monoid();
/// assert_eq!(sum.concat_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
///
/// let longest = MonoidInstance::new(String::new, |a: String, b: String| {
///     if b.len() > a.len() { b } else { a }
/// });
/// assert_eq!(longest.concat("ab".to_string(), "abc".to_string()), "abc");
/// ```
pub struct MonoidInstance<T> {
    empty_function: EmptyFunction<T>,
    concat_function: ConcatFunction<T>,
}

impl<T: 'static> MonoidInstance<T> {
    /// Creates an instance from an identity producer and a combining function.
    pub fn new<Empty, Concat>(empty: Empty, concat: Concat) -> Self
    where
        Empty: Fn() -> T + Send + Sync + 'static,
        Concat: Fn(T, T) -> T + Send + Sync + 'static,
    {
        Self {
            empty_function: Arc::new(empty),
            concat_function: Arc::new(concat),
        }
    }

    /// Creates the instance of a type-level [`Monoid`].
    #[must_use]
    pub fn from_monoid() -> Self
    where
        T: Monoid,
    {
        Self::new(T::empty, Semigroup::combine)
    }

    /// Returns the identity element.
    pub fn empty(&self) -> T {
        (self.empty_function)()
    }

    /// Combines two values.
    pub fn concat(&self, left: T, right: T) -> T {
        (self.concat_function)(left, right)
    }

    /// Folds an iterator, starting from the identity element.
    pub fn concat_all<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, value| self.concat(accumulator, value))
    }

    /// Swaps the operands of `concat`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let concat_function = self.concat_function.clone();
        Self {
            empty_function: self.empty_function.clone(),
            concat_function: Arc::new(move |left, right| concat_function(right, left)),
        }
    }
}

impl<T> Clone for MonoidInstance<T> {
    fn clone(&self) -> Self {
        Self {
            empty_function: self.empty_function.clone(),
            concat_function: self.concat_function.clone(),
        }
    }
}

impl<T> fmt::Debug for MonoidInstance<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<MonoidInstance>")
    }
}
