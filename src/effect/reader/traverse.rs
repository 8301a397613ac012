//! Traversal and tuple sequencing for `Reader`.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Reader;

/// Applies `function` to every element and runs the resulting readers
/// against one environment.
///
/// # Examples
///
/// ```rust
/// use fpcomb::effect::{reader, Reader};
///
/// let scaled = reader::traverse_array(vec![1, 2, 3], |n| Reader::asks(move |factor: i32| n * factor));
/// assert_eq!(scaled.run(10), vec![10, 20, 30]);
/// ```
pub fn traverse_array<I, T, R, B, F>(items: I, function: F) -> Reader<R, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(T) -> Reader<R, B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, T, R, B, F>(items: I, mut function: F) -> Reader<R, Vec<B>>
where
    I: IntoIterator<Item = T>,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(usize, T) -> Reader<R, B>,
{
    traverse_array(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Runs every reader against the same environment.
pub fn sequence_array<I, R, A>(items: I) -> Reader<R, Vec<A>>
where
    I: IntoIterator<Item = Reader<R, A>>,
    R: Clone + 'static,
    A: 'static,
{
    let readers: Vec<Reader<R, A>> = items.into_iter().collect();
    Reader::new(move |environment: R| {
        readers
            .iter()
            .map(|reader| reader.run(environment.clone()))
            .collect()
    })
}

/// Applies `function` to every value of a map, keeping the keys.
pub fn traverse_record<K, T, R, B, F, H>(record: HashMap<K, T, H>, mut function: F) -> Reader<R, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    B: 'static,
    F: FnMut(T) -> Reader<R, B>,
{
    sequence_record(
        record
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect(),
    )
}

/// Runs every reader of a map against the same environment.
pub fn sequence_record<K, R, A, H>(record: HashMap<K, Reader<R, A>, H>) -> Reader<R, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    R: Clone + 'static,
    A: 'static,
{
    let entries: Vec<(K, Reader<R, A>)> = record.into_iter().collect();
    Reader::new(move |environment: R| {
        entries
            .iter()
            .map(|(key, reader)| (key.clone(), reader.run(environment.clone())))
            .collect()
    })
}

/// Wraps a single result in a 1-tuple.
pub fn sequence_t1<R: Clone + 'static, A: 'static>(first: Reader<R, A>) -> Reader<R, (A,)> {
    first.map(|a| (a,))
}

/// Pairs two results.
pub fn sequence_t2<R: Clone + 'static, A: 'static, B: 'static>(
    first: Reader<R, A>,
    second: Reader<R, B>,
) -> Reader<R, (A, B)> {
    first.product(second)
}

/// Collects three results.
pub fn sequence_t3<R: Clone + 'static, A: 'static, B: 'static, C: 'static>(
    first: Reader<R, A>,
    second: Reader<R, B>,
    third: Reader<R, C>,
) -> Reader<R, (A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Collects four results.
pub fn sequence_t4<R: Clone + 'static, A: 'static, B: 'static, C: 'static, D: 'static>(
    first: Reader<R, A>,
    second: Reader<R, B>,
    third: Reader<R, C>,
    fourth: Reader<R, D>,
) -> Reader<R, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
