//! Traversal and tuple sequencing for `ReaderIO`.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::ReaderIO;
use crate::effect::io;

/// Applies `function` to every element and runs the results in order.
pub fn traverse_array<I, T, R, B, F>(items: I, function: F) -> ReaderIO<R, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIO<R, B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, T, R, B, F>(items: I, mut function: F) -> ReaderIO<R, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(usize, T) -> ReaderIO<R, B>,
{
    traverse_array(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Supplies the environment to every computation and sequences the
/// resulting `IO`s.
///
/// # Examples
///
/// ```rust
/// use fpcomb::effect::{reader_io, ReaderIO};
///
/// let all = reader_io::sequence_array(vec![ReaderIO::asks(|n: i32| n), ReaderIO::of(7)]);
/// assert_eq!(all.run(1).run_unsafe(), vec![1, 7]);
/// ```
pub fn sequence_array<I, R, A>(items: I) -> ReaderIO<R, Vec<A>>
where
    I: IntoIterator<Item = ReaderIO<R, A>>,
    R: Clone + 'static,
    A: 'static,
{
    let computations: Vec<ReaderIO<R, A>> = items.into_iter().collect();
    ReaderIO::new(move |environment: R| {
        io::sequence_array(
            computations
                .iter()
                .map(|computation| computation.run(environment.clone()))
                .collect::<Vec<_>>(),
        )
    })
}

/// Applies `function` to every value of a map, keeping the keys.
pub fn traverse_record<K, T, R, B, F, H>(record: HashMap<K, T, H>, mut function: F) -> ReaderIO<R, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIO<R, B>,
{
    sequence_record(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Supplies the environment to every computation of a map.
pub fn sequence_record<K, R, A, H>(record: HashMap<K, ReaderIO<R, A>, H>) -> ReaderIO<R, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    A: 'static,
{
    let entries: Vec<(K, ReaderIO<R, A>)> = record.into_iter().collect();
    ReaderIO::new(move |environment: R| {
        io::sequence_record(
            entries
                .iter()
                .map(|(key, computation)| (key.clone(), computation.run(environment.clone())))
                .collect(),
        )
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<R: 'static, A: 'static>(first: ReaderIO<R, A>) -> ReaderIO<R, (A,)> {
    first.map(|a| (a,))
}

/// Pairs two values.
pub fn sequence_t2<R: Clone + Send + Sync + 'static, A: 'static, B: 'static>(
    first: ReaderIO<R, A>,
    second: ReaderIO<R, B>,
) -> ReaderIO<R, (A, B)> {
    first.product(second)
}

/// Collects three values.
pub fn sequence_t3<R: Clone + Send + Sync + 'static, A: 'static, B: 'static, C: 'static>(
    first: ReaderIO<R, A>,
    second: ReaderIO<R, B>,
    third: ReaderIO<R, C>,
) -> ReaderIO<R, (A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Collects four values.
pub fn sequence_t4<R: Clone + Send + Sync + 'static, A: 'static, B: 'static, C: 'static, D: 'static>(
    first: ReaderIO<R, A>,
    second: ReaderIO<R, B>,
    third: ReaderIO<R, C>,
    fourth: ReaderIO<R, D>,
) -> ReaderIO<R, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
