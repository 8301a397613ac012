//! Traversal and tuple sequencing for `StateReaderIOEither`.
//!
//! The state flows through the computations in order and the first `Left`
//! stops the run.

use super::StateReaderIOEither;
use crate::control::Either;

/// Applies `function` to every element and runs the results in order.
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::Either;
/// use fpcomb::effect::{state_reader_io_either, StateReaderIOEither};
///
/// type Alloc<A> = StateReaderIOEither<u32, (), String, A>;
///
/// let labelled = state_reader_io_either::traverse_array(vec!["x", "y"], |name| {
///     Alloc::get().chain(move |id| Alloc::put(id + 1).map(move |()| format!("{name}{id}")))
/// });
/// assert_eq!(
///     labelled.provide(7, ()).run_unsafe(),
///     Either::Right((vec!["x7".to_string(), "y8".to_string()], 9))
/// );
/// ```
pub fn traverse_array<I, T, S, R, E, B, F>(items: I, function: F) -> StateReaderIOEither<S, R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> StateReaderIOEither<S, R, E, B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Runs the computations in order, threading the state and stopping at the
/// first `Left`.
pub fn sequence_array<I, S, R, E, A>(items: I) -> StateReaderIOEither<S, R, E, Vec<A>>
where
    I: IntoIterator<Item = StateReaderIOEither<S, R, E, A>>,
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    let computations: Vec<StateReaderIOEither<S, R, E, A>> = items.into_iter().collect();
    StateReaderIOEither::from_step(move |initial, environment: R| {
        let mut values = Vec::with_capacity(computations.len());
        let mut state = initial;
        for computation in &computations {
            match computation.step(state, environment.clone()) {
                Either::Left(error) => return Either::Left(error),
                Either::Right((value, next)) => {
                    values.push(value);
                    state = next;
                }
            }
        }
        Either::Right((values, state))
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<S, R, E, A>(first: StateReaderIOEither<S, R, E, A>) -> StateReaderIOEither<S, R, E, (A,)>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    first.map(|a| (a,))
}

/// Pairs two values.
pub fn sequence_t2<S, R, E, A, B>(
    first: StateReaderIOEither<S, R, E, A>,
    second: StateReaderIOEither<S, R, E, B>,
) -> StateReaderIOEither<S, R, E, (A, B)>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
{
    first.product(second)
}

/// Collects three values.
pub fn sequence_t3<S, R, E, A, B, C>(
    first: StateReaderIOEither<S, R, E, A>,
    second: StateReaderIOEither<S, R, E, B>,
    third: StateReaderIOEither<S, R, E, C>,
) -> StateReaderIOEither<S, R, E, (A, B, C)>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
{
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Collects four values.
pub fn sequence_t4<S, R, E, A, B, C, D>(
    first: StateReaderIOEither<S, R, E, A>,
    second: StateReaderIOEither<S, R, E, B>,
    third: StateReaderIOEither<S, R, E, C>,
    fourth: StateReaderIOEither<S, R, E, D>,
) -> StateReaderIOEither<S, R, E, (A, B, C, D)>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
