//! Monoids over `IOEither`; see [`crate::control::either`] for the three
//! flavours.
//!
//! The applicative monoid skips the second computation once the first has
//! failed, the alt monoid skips it once the first has succeeded, and the
//! alternative monoid always runs both, left first.

use super::IOEither;
use crate::control::{Either, either};
use crate::typeclass::{Monoid, MonoidInstance, Semigroup};

impl<E: 'static, A: Semigroup + 'static> Semigroup for IOEither<E, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<E: 'static, A: Monoid + 'static> Monoid for IOEither<E, A> {
    fn empty() -> Self {
        Self::new(|| Either::Right(A::empty()))
    }
}

/// Monoid whose `concat` runs the second computation only if the first
/// failed.
pub fn alt_monoid<E, A>(zero: IOEither<E, A>) -> MonoidInstance<IOEither<E, A>>
where
    E: 'static,
    A: 'static,
{
    MonoidInstance::new(
        move || zero.clone(),
        |first: IOEither<E, A>, second: IOEither<E, A>| first.alt(move || second.clone()),
    )
}

/// Monoid combining successes with `A`'s monoid, otherwise keeping whichever
/// side succeeded.
pub fn alternative_monoid<E, A>() -> MonoidInstance<IOEither<E, A>>
where
    E: 'static,
    A: Monoid + 'static,
{
    let pointwise = either::alternative_monoid::<E, A>();
    MonoidInstance::new(IOEither::empty, move |first: IOEither<E, A>, second: IOEither<E, A>| {
        let pointwise = pointwise.clone();
        first
            .into_io()
            .map2(second.into_io(), move |a, b| pointwise.concat(a, b))
            .into()
    })
}
