//! Prisms: partial access to one variant of a sum type.
//!
//! # Laws
//!
//! 1. `prism.preview_owned(prism.review(a)) == Some(a)`
//! 2. if `prism.preview_owned(s) == Some(a)` then `prism.review(a) == s`
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::prism;
//! use fpcomb::optics::Prism;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Event { Click(u32), Key(char) }
//!
//! let key = prism!(Event, Key);
//! assert_eq!(key.preview(&Event::Key('q')), Some(&'q'));
//! assert_eq!(key.preview(&Event::Click(3)), None);
//! assert_eq!(key.review('z'), Event::Key('z'));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::Either;

/// Focuses on the payload `A` of one variant of `S`.
pub trait Prism<S, A> {
    /// Borrows the payload if `source` is the focused variant.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Builds the focused variant from a payload.
    fn review(&self, value: A) -> S;

    /// Takes the payload if `source` is the focused variant.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Modifies the payload; `None` when the variant does not match.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview_owned(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the payload, returning other variants unchanged.
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        match self.preview_owned(source.clone()) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Focuses further into the payload with another prism.
    fn compose<B, P>(self, inner: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, inner)
    }
}

/// A prism built from three functions.
pub struct FunctionPrism<S, A, Preview, Review, PreviewOwned> {
    preview_function: Preview,
    review_function: Review,
    preview_owned_function: PreviewOwned,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Preview, Review, PreviewOwned> FunctionPrism<S, A, Preview, Review, PreviewOwned>
where
    Preview: Fn(&S) -> Option<&A>,
    Review: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Option<A>,
{
    /// Creates a prism from its preview, review and owning preview functions.
    pub const fn new(
        preview_function: Preview,
        review_function: Review,
        preview_owned_function: PreviewOwned,
    ) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Preview, Review, PreviewOwned> Prism<S, A>
    for FunctionPrism<S, A, Preview, Review, PreviewOwned>
where
    Preview: Fn(&S) -> Option<&A>,
    Review: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Option<A>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Preview: Clone, Review: Clone, PreviewOwned: Clone> Clone
    for FunctionPrism<S, A, Preview, Review, PreviewOwned>
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Preview, Review, PreviewOwned> fmt::Debug
    for FunctionPrism<S, A, Preview, Review, PreviewOwned>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionPrism").finish_non_exhaustive()
    }
}

/// Two prisms chained.
pub struct ComposedPrism<Outer, Inner, A> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn() -> A>,
}

impl<Outer, Inner, A> ComposedPrism<Outer, Inner, A> {
    /// Chains two prisms.
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, Outer, Inner> Prism<S, B> for ComposedPrism<Outer, Inner, A>
where
    Outer: Prism<S, A>,
    Inner: Prism<A, B>,
    A: 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.outer
            .preview(source)
            .and_then(|middle| self.inner.preview(middle))
    }

    fn review(&self, value: B) -> S {
        self.outer.review(self.inner.review(value))
    }

    fn preview_owned(&self, source: S) -> Option<B> {
        self.outer
            .preview_owned(source)
            .and_then(|middle| self.inner.preview_owned(middle))
    }
}

impl<Outer: Clone, Inner: Clone, A> Clone for ComposedPrism<Outer, Inner, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<Outer, Inner, A> fmt::Debug for ComposedPrism<Outer, Inner, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ComposedPrism").finish_non_exhaustive()
    }
}

// =============================================================================
// Prisms for the crate's own sum types
// =============================================================================

/// Focuses on the `Left` branch of an [`Either`].
pub struct LeftPrism<E, A>(PhantomData<fn() -> (E, A)>);

/// Focuses on the `Right` branch of an [`Either`].
pub struct RightPrism<E, A>(PhantomData<fn() -> (E, A)>);

/// Focuses on the `Some` branch of an `Option`.
pub struct SomePrism<A>(PhantomData<fn() -> A>);

/// Prism onto the error of an `Either`.
#[must_use]
pub const fn left_prism<E, A>() -> LeftPrism<E, A> {
    LeftPrism(PhantomData)
}

/// Prism onto the value of an `Either`.
///
/// ```rust
/// use fpcomb::control::Either;
/// use fpcomb::optics::{right_prism, Prism};
///
/// let prism = right_prism::<String, i32>();
/// assert_eq!(prism.preview(&Either::Right(3)), Some(&3));
/// assert_eq!(prism.review(4), Either::Right(4));
/// ```
#[must_use]
pub const fn right_prism<E, A>() -> RightPrism<E, A> {
    RightPrism(PhantomData)
}

/// Prism onto the content of an `Option`.
#[must_use]
pub const fn some_prism<A>() -> SomePrism<A> {
    SomePrism(PhantomData)
}

impl<E, A> Prism<Either<E, A>, E> for LeftPrism<E, A> {
    fn preview<'a>(&self, source: &'a Either<E, A>) -> Option<&'a E> {
        source.left_ref()
    }

    fn review(&self, value: E) -> Either<E, A> {
        Either::Left(value)
    }

    fn preview_owned(&self, source: Either<E, A>) -> Option<E> {
        source.left_option()
    }
}

impl<E, A> Prism<Either<E, A>, A> for RightPrism<E, A> {
    fn preview<'a>(&self, source: &'a Either<E, A>) -> Option<&'a A> {
        source.right_ref()
    }

    fn review(&self, value: A) -> Either<E, A> {
        Either::Right(value)
    }

    fn preview_owned(&self, source: Either<E, A>) -> Option<A> {
        source.to_option()
    }
}

impl<A> Prism<Option<A>, A> for SomePrism<A> {
    fn preview<'a>(&self, source: &'a Option<A>) -> Option<&'a A> {
        source.as_ref()
    }

    fn review(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn preview_owned(&self, source: Option<A>) -> Option<A> {
        source
    }
}

macro_rules! marker_prism_impls {
    ($($prism:ident < $($generic:ident),+ >),+) => {
        $(
            impl<$($generic),+> Clone for $prism<$($generic),+> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<$($generic),+> Copy for $prism<$($generic),+> {}

            impl<$($generic),+> fmt::Debug for $prism<$($generic),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(stringify!($prism))
                }
            }
        )+
    };
}

marker_prism_impls!(LeftPrism<E, A>, RightPrism<E, A>, SomePrism<A>);

/// Builds a [`FunctionPrism`] for a single-field tuple variant.
///
/// ```text
/// prism!(EnumType, Variant)
/// prism!(EnumType<T>, Variant)
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    #[rstest]
    fn modify_option_only_touches_matching_variant() {
        let circle = prism!(Shape, Circle);
        assert_eq!(circle.modify_option(Shape::Circle(1.0), |r| r * 2.0), Some(Shape::Circle(2.0)));
        assert_eq!(circle.modify_option(Shape::Square(1.0), |r| r * 2.0), None);
        assert_eq!(
            circle.modify_or_identity(Shape::Square(1.0), |r| r * 2.0),
            Shape::Square(1.0)
        );
    }

    #[rstest]
    fn composed_prism_reaches_nested_payload() {
        let nested = right_prism::<String, Option<i32>>().compose(some_prism::<i32>());
        assert_eq!(nested.preview(&Either::Right(Some(3))), Some(&3));
        assert_eq!(nested.preview(&Either::Right(None)), None);
        assert_eq!(nested.preview(&Either::Left("e".to_string())), None);
        assert_eq!(nested.review(5), Either::Right(Some(5)));
    }

    #[rstest]
    fn left_prism_focuses_error() {
        let prism = left_prism::<&str, i32>();
        assert_eq!(prism.preview_owned(Either::Left("e")), Some("e"));
        assert_eq!(prism.preview_owned(Either::Right(1)), None);
    }
}
