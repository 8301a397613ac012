//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! Associativity is inherited from [`Semigroup`].

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpcomb::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// Zero is obtained as `A::default()`, which is `0` for every numeric type.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_identity_is_zero() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    }

    #[rstest]
    fn product_identity_is_one() {
        assert_eq!(Product::<i64>::empty(), Product(1));
        assert_eq!(Product::combine_all(vec![Product(2), Product(5)]), Product(10));
    }

    #[rstest]
    fn max_identity_is_minimum() {
        assert_eq!(Max::<i8>::empty(), Max(i8::MIN));
        assert_eq!(Min::<u16>::empty(), Min(u16::MAX));
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
    }
}
