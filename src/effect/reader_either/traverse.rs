//! Traversal and tuple sequencing for `ReaderEither`.
//!
//! Every computation sees the same environment; the first `Left` stops
//! the traversal.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::ReaderEither;
use crate::control::{Either, either};

/// Applies `function` to every element and sequences the results.
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::Either;
/// use fpcomb::effect::{reader_either, ReaderEither};
///
/// let bounded = reader_either::traverse_array(vec![1, 5, 2], |n| {
///     ReaderEither::new(move |max: i32| if n <= max { Either::Right(n) } else { Either::Left(n) })
/// });
/// assert_eq!(bounded.run(4), Either::Left(5));
/// assert_eq!(bounded.run(9), Either::Right(vec![1, 5, 2]));
/// ```
pub fn traverse_array<I, T, R, E, B, F>(items: I, function: F) -> ReaderEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderEither<R, E, B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, T, R, E, B, F>(items: I, mut function: F) -> ReaderEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(usize, T) -> ReaderEither<R, E, B>,
{
    traverse_array(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Evaluates every computation in order, stopping at the first `Left`.
pub fn sequence_array<I, R, E, A>(items: I) -> ReaderEither<R, E, Vec<A>>
where
    I: IntoIterator<Item = ReaderEither<R, E, A>>,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let computations: Vec<ReaderEither<R, E, A>> = items.into_iter().collect();
    ReaderEither::new(move |environment: R| {
        either::traverse_array(&computations, |computation| computation.run(environment.clone()))
    })
}

/// Applies `function` to every value of a map, keeping the keys.
pub fn traverse_record<K, T, R, E, B, F, H>(
    record: HashMap<K, T, H>,
    mut function: F,
) -> ReaderEither<R, E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderEither<R, E, B>,
{
    sequence_record(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Evaluates the computations of a map, stopping at the first `Left`.
pub fn sequence_record<K, R, E, A, H>(record: HashMap<K, ReaderEither<R, E, A>, H>) -> ReaderEither<R, E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let entries: Vec<(K, ReaderEither<R, E, A>)> = record.into_iter().collect();
    ReaderEither::new(move |environment: R| {
        let mut collected = HashMap::with_capacity_and_hasher(entries.len(), H::default());
        for (key, computation) in &entries {
            match computation.run(environment.clone()) {
                Either::Left(error) => return Either::Left(error),
                Either::Right(value) => {
                    collected.insert(key.clone(), value);
                }
            }
        }
        Either::Right(collected)
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<R: Clone + 'static, E: 'static, A: 'static>(
    first: ReaderEither<R, E, A>,
) -> ReaderEither<R, E, (A,)> {
    first.map(|a| (a,))
}

/// Pairs two successes.
pub fn sequence_t2<R: Clone + 'static, E: 'static, A: 'static, B: 'static>(
    first: ReaderEither<R, E, A>,
    second: ReaderEither<R, E, B>,
) -> ReaderEither<R, E, (A, B)> {
    first.product(second)
}

/// Collects three successes.
pub fn sequence_t3<R: Clone + 'static, E: 'static, A: 'static, B: 'static, C: 'static>(
    first: ReaderEither<R, E, A>,
    second: ReaderEither<R, E, B>,
    third: ReaderEither<R, E, C>,
) -> ReaderEither<R, E, (A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Collects four successes.
pub fn sequence_t4<R: Clone + 'static, E: 'static, A: 'static, B: 'static, C: 'static, D: 'static>(
    first: ReaderEither<R, E, A>,
    second: ReaderEither<R, E, B>,
    third: ReaderEither<R, E, C>,
    fourth: ReaderEither<R, E, D>,
) -> ReaderEither<R, E, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
