//! Monoids over `ReaderIOEither`, lifting the `IOEither` ones under the
//! environment.

use super::ReaderIOEither;
use crate::effect::{IOEither, io_either};
use crate::typeclass::{Monoid, MonoidInstance, Semigroup};

impl<R, E, A> Semigroup for ReaderIOEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: Semigroup + 'static,
{
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<R, E, A> Monoid for ReaderIOEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: Monoid + 'static,
{
    fn empty() -> Self {
        Self::new(|_| IOEither::empty())
    }
}

/// Monoid whose `concat` runs the second computation only if the first
/// failed; `empty` is `zero`.
pub fn alt_monoid<R, E, A>(zero: ReaderIOEither<R, E, A>) -> MonoidInstance<ReaderIOEither<R, E, A>>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    MonoidInstance::new(
        move || zero.clone(),
        |first: ReaderIOEither<R, E, A>, second: ReaderIOEither<R, E, A>| first.alt(move || second.clone()),
    )
}

/// Monoid combining successes with `A`'s monoid and otherwise keeping
/// whichever side succeeded; both sides always run.
pub fn alternative_monoid<R, E, A>() -> MonoidInstance<ReaderIOEither<R, E, A>>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: Monoid + 'static,
{
    let pointwise = io_either::alternative_monoid::<E, A>();
    MonoidInstance::new(
        ReaderIOEither::empty,
        move |first: ReaderIOEither<R, E, A>, second: ReaderIOEither<R, E, A>| {
            let pointwise = pointwise.clone();
            ReaderIOEither::new(move |environment: R| {
                pointwise.concat(first.run(environment.clone()), second.run(environment))
            })
        },
    )
}
