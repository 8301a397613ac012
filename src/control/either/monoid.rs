//! Monoids over `Either`.
//!
//! - Applicative monoid: [`Semigroup`] / [`Monoid`] impls below. Both sides
//!   must succeed; the first `Left` wins.
//! - [`alternative_monoid`]: combine successes, fall back to whichever side
//!   succeeded.
//! - [`alt_monoid`]: first success wins; identity is a caller-supplied failure.

use super::Either;
use crate::typeclass::{Monoid, MonoidInstance, Semigroup};

impl<E, A: Semigroup> Semigroup for Either<E, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<E, A: Monoid> Monoid for Either<E, A> {
    fn empty() -> Self {
        Self::Right(A::empty())
    }
}

/// Monoid whose `concat` keeps the first success.
///
/// `zero` is returned by `empty()` and should be a `Left`; with a `Right`
/// zero the left-identity law does not hold.
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::{either, Either};
///
/// let first_success = either::alt_monoid(Either::<&str, i32>::Left("nothing"));
/// let all = vec![Either::Left("a"), Either::Right(2), Either::Right(3)];
/// assert_eq!(first_success.concat_all(all), Either::Right(2));
/// assert_eq!(first_success.concat_all(Vec::new()), Either::Left("nothing"));
/// ```
pub fn alt_monoid<E, A>(zero: Either<E, A>) -> MonoidInstance<Either<E, A>>
where
    E: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    MonoidInstance::new(move || zero.clone(), |first: Either<E, A>, second| first.alt(|| second))
}

/// Monoid combining successes with `A`'s monoid and otherwise keeping
/// whichever side succeeded.
///
/// When both sides fail the second failure is kept.
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::{either, Either};
/// use fpcomb::typeclass::Sum;
///
/// let monoid = either::alternative_monoid::<&str, Sum<i32>>();
/// assert_eq!(monoid.concat(Either::Right(Sum(1)), Either::Right(Sum(2))), Either::Right(Sum(3)));
/// assert_eq!(monoid.concat(Either::Left("x"), Either::Right(Sum(2))), Either::Right(Sum(2)));
/// assert_eq!(monoid.concat(Either::Left("x"), Either::Left("y")), Either::Left("y"));
/// ```
pub fn alternative_monoid<E, A>() -> MonoidInstance<Either<E, A>>
where
    E: 'static,
    A: Monoid + 'static,
{
    MonoidInstance::new(
        || Either::Right(A::empty()),
        |first: Either<E, A>, second: Either<E, A>| match (first, second) {
            (Either::Right(a), Either::Right(b)) => Either::Right(a.combine(b)),
            (Either::Right(a), Either::Left(_)) => Either::Right(a),
            (Either::Left(_), second) => second,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn applicative_combine_adds_successes() {
        let left: Either<&str, Sum<i32>> = Either::Right(Sum(1));
        assert_eq!(left.combine(Either::Right(Sum(2))), Either::Right(Sum(3)));
    }

    #[rstest]
    fn applicative_combine_keeps_first_left() {
        let left: Either<&str, Sum<i32>> = Either::Left("first");
        assert_eq!(left.combine(Either::Left("second")), Either::Left("first"));
    }

    #[rstest]
    fn applicative_empty_is_right_identity() {
        assert_eq!(Either::<&str, String>::empty(), Either::Right(String::new()));
    }

    #[rstest]
    fn alternative_empty_is_identity_for_successes_and_absorbs_failures() {
        let monoid = alternative_monoid::<&str, Sum<i32>>();
        let value: Either<&str, Sum<i32>> = Either::Left("e");
        assert_eq!(monoid.concat(monoid.empty(), value), Either::Right(Sum(0)));
        assert_eq!(monoid.concat(monoid.empty(), Either::Right(Sum(4))), Either::Right(Sum(4)));
        assert_eq!(monoid.concat(Either::Right(Sum(4)), monoid.empty()), Either::Right(Sum(4)));
    }
}
