//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type with an associative binary operation.
///
/// Effect types whose payload is a semigroup are semigroups themselves:
/// their `combine` runs both effects and combines the two successes, which
/// is the applicative lifting of the payload's operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::reduce_all(vec![Sum(1), Sum(2)]), Some(Sum(3)));
    /// assert_eq!(Sum::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` acts as the identity: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("Hello, ").combine(String::from("World!")),
            "Hello, World!"
        );
    }

    #[rstest]
    fn string_combine_ref_keeps_operands() {
        let left = String::from("ab");
        let right = String::from("cd");
        assert_eq!(left.combine_ref(&right), "abcd");
        assert_eq!(left, "ab");
    }

    #[rstest]
    #[case(Some(Sum(1)), Some(Sum(2)), Some(Sum(3)))]
    #[case(Some(Sum(1)), None, Some(Sum(1)))]
    #[case(None, Some(Sum(2)), Some(Sum(2)))]
    #[case(None, None, None)]
    fn option_combine_skips_none(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn max_and_min_pick_extremes() {
        assert_eq!(Max(3).combine(Max(7)), Max(7));
        assert_eq!(Min(3).combine(Min(7)), Min(3));
    }

    #[rstest]
    fn tuple_combines_pointwise() {
        let left = (Sum(1), String::from("a"));
        let right = (Sum(2), String::from("b"));
        assert_eq!(left.combine(right), (Sum(3), String::from("ab")));
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        assert_eq!(String::reduce_all(Vec::<String>::new()), None);
        assert_eq!(
            String::reduce_all(vec!["a".to_string(), "b".to_string()]),
            Some("ab".to_string())
        );
    }
}
