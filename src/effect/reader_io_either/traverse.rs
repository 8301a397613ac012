//! Traversal and tuple sequencing for `ReaderIOEither`.
//!
//! The environment is supplied to every computation and the resulting
//! `IOEither`s are sequenced by their `io_either` counterparts, so `*_seq`
//! stops at the first `Left` while `*_par` runs everything before reporting
//! the first `Left`.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::ReaderIOEither;
use crate::effect::{IOEither, io_either};

fn supply<R, E, A>(computations: &[ReaderIOEither<R, E, A>], environment: &R) -> Vec<IOEither<E, A>>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    computations
        .iter()
        .map(|computation| computation.run(environment.clone()))
        .collect()
}

fn supply_record<K, R, E, A, H>(
    entries: &[(K, ReaderIOEither<R, E, A>)],
    environment: &R,
) -> HashMap<K, IOEither<E, A>, H>
where
    K: Clone + Eq + Hash,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    entries
        .iter()
        .map(|(key, computation)| (key.clone(), computation.run(environment.clone())))
        .collect()
}

/// Same as [`traverse_array_seq`].
pub fn traverse_array<I, T, R, E, B, F>(items: I, function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    traverse_array_seq(items, function)
}

/// Maps every element to a computation and runs them in order, stopping at
/// the first `Left`.
pub fn traverse_array_seq<I, T, R, E, B, F>(items: I, function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    sequence_array_seq(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Maps every element to a computation and runs all of them, reporting the
/// first `Left`.
pub fn traverse_array_par<I, T, R, E, B, F>(items: I, function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    sequence_array_par(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Same as [`traverse_array_with_index_seq`].
pub fn traverse_array_with_index<I, T, R, E, B, F>(items: I, function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(usize, T) -> ReaderIOEither<R, E, B>,
{
    traverse_array_with_index_seq(items, function)
}

/// [`traverse_array_seq`] passing each element's index.
pub fn traverse_array_with_index_seq<I, T, R, E, B, F>(items: I, mut function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(usize, T) -> ReaderIOEither<R, E, B>,
{
    traverse_array_seq(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// [`traverse_array_par`] passing each element's index.
pub fn traverse_array_with_index_par<I, T, R, E, B, F>(items: I, mut function: F) -> ReaderIOEither<R, E, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(usize, T) -> ReaderIOEither<R, E, B>,
{
    traverse_array_par(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Same as [`sequence_array_seq`].
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::Either;
/// use fpcomb::effect::{reader_io_either, ReaderIOEither};
///
/// let all = reader_io_either::sequence_array(vec![
///     ReaderIOEither::<(), &str, i32>::left("err"),
///     ReaderIOEither::of(2),
///     ReaderIOEither::of(3),
/// ]);
/// assert_eq!(all.run(()).run_unsafe(), Either::Left("err"));
/// ```
pub fn sequence_array<I, R, E, A>(items: I) -> ReaderIOEither<R, E, Vec<A>>
where
    I: IntoIterator<Item = ReaderIOEither<R, E, A>>,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    sequence_array_seq(items)
}

/// Runs the computations in order, stopping at the first `Left`.
pub fn sequence_array_seq<I, R, E, A>(items: I) -> ReaderIOEither<R, E, Vec<A>>
where
    I: IntoIterator<Item = ReaderIOEither<R, E, A>>,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let computations: Vec<ReaderIOEither<R, E, A>> = items.into_iter().collect();
    ReaderIOEither::new(move |environment: R| io_either::sequence_array_seq(supply(&computations, &environment)))
}

/// Runs every computation, then reports the first `Left` in order.
pub fn sequence_array_par<I, R, E, A>(items: I) -> ReaderIOEither<R, E, Vec<A>>
where
    I: IntoIterator<Item = ReaderIOEither<R, E, A>>,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let computations: Vec<ReaderIOEither<R, E, A>> = items.into_iter().collect();
    ReaderIOEither::new(move |environment: R| io_either::sequence_array_par(supply(&computations, &environment)))
}

/// Same as [`traverse_record_seq`].
pub fn traverse_record<K, T, R, E, B, F, H>(record: HashMap<K, T, H>, function: F) -> ReaderIOEither<R, E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    traverse_record_seq(record, function)
}

/// Maps every value to a computation and runs them, stopping at the first
/// `Left`.
pub fn traverse_record_seq<K, T, R, E, B, F, H>(
    record: HashMap<K, T, H>,
    mut function: F,
) -> ReaderIOEither<R, E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    sequence_record_seq(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Maps every value to a computation and runs all of them, reporting the
/// first `Left`.
pub fn traverse_record_par<K, T, R, E, B, F, H>(
    record: HashMap<K, T, H>,
    mut function: F,
) -> ReaderIOEither<R, E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(T) -> ReaderIOEither<R, E, B>,
{
    sequence_record_par(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Same as [`sequence_record_seq`].
pub fn sequence_record<K, R, E, A, H>(record: HashMap<K, ReaderIOEither<R, E, A>, H>) -> ReaderIOEither<R, E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    sequence_record_seq(record)
}

/// Runs the computations of a map, stopping at the first `Left`.
pub fn sequence_record_seq<K, R, E, A, H>(
    record: HashMap<K, ReaderIOEither<R, E, A>, H>,
) -> ReaderIOEither<R, E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let entries: Vec<(K, ReaderIOEither<R, E, A>)> = record.into_iter().collect();
    ReaderIOEither::new(move |environment: R| io_either::sequence_record_seq(supply_record(&entries, &environment)))
}

/// Runs every computation of a map, then reports the first `Left`.
pub fn sequence_record_par<K, R, E, A, H>(
    record: HashMap<K, ReaderIOEither<R, E, A>, H>,
) -> ReaderIOEither<R, E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    let entries: Vec<(K, ReaderIOEither<R, E, A>)> = record.into_iter().collect();
    ReaderIOEither::new(move |environment: R| io_either::sequence_record_par(supply_record(&entries, &environment)))
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<R: 'static, E: 'static, A: 'static>(
    first: ReaderIOEither<R, E, A>,
) -> ReaderIOEither<R, E, (A,)> {
    first.map(|a| (a,))
}

/// Runs two computations in order and pairs their values.
pub fn sequence_t2<R, E, A, B>(
    first: ReaderIOEither<R, E, A>,
    second: ReaderIOEither<R, E, B>,
) -> ReaderIOEither<R, E, (A, B)>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
{
    first.product(second)
}

/// Runs three computations in order.
pub fn sequence_t3<R, E, A, B, C>(
    first: ReaderIOEither<R, E, A>,
    second: ReaderIOEither<R, E, B>,
    third: ReaderIOEither<R, E, C>,
) -> ReaderIOEither<R, E, (A, B, C)>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
{
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Runs four computations in order.
pub fn sequence_t4<R, E, A, B, C, D>(
    first: ReaderIOEither<R, E, A>,
    second: ReaderIOEither<R, E, B>,
    third: ReaderIOEither<R, E, C>,
    fourth: ReaderIOEither<R, E, D>,
) -> ReaderIOEither<R, E, (A, B, C, D)>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
