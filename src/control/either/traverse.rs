//! Traversal and sequencing for `Either`.
//!
//! `Either` is strict, so these helpers stop at the first `Left` and never
//! call `function` on the remaining elements.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Either;

/// Applies `function` to every element, collecting the successes.
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::{either, Either};
///
/// let parse = |text: &str| Either::try_catch(|| text.parse::<i32>(), |_| text.to_string());
///
/// assert_eq!(either::traverse_array(vec!["1", "2"], parse), Either::Right(vec![1, 2]));
/// assert_eq!(either::traverse_array(vec!["1", "x"], parse), Either::Left("x".to_string()));
/// ```
pub fn traverse_array<I, A, B, E, F>(items: I, mut function: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<E, B>,
{
    let iterator = items.into_iter();
    let mut collected = Vec::with_capacity(iterator.size_hint().0);
    for item in iterator {
        match function(item) {
            Either::Left(error) => return Either::Left(error),
            Either::Right(value) => collected.push(value),
        }
    }
    Either::Right(collected)
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, A, B, E, F>(items: I, mut function: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(usize, A) -> Either<E, B>,
{
    traverse_array(items.into_iter().enumerate(), |(index, item)| {
        function(index, item)
    })
}

/// Turns a collection of `Either`s into an `Either` of a collection.
pub fn sequence_array<I, E, A>(items: I) -> Either<E, Vec<A>>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    traverse_array(items, |either| either)
}

/// Applies `function` to every value of a map, keeping the keys.
///
/// Iteration order of a `HashMap` is unspecified, so when several entries
/// fail, which `Left` is reported is unspecified too.
pub fn traverse_record<K, A, B, E, F, H>(record: HashMap<K, A, H>, mut function: F) -> Either<E, HashMap<K, B, H>>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
    F: FnMut(A) -> Either<E, B>,
{
    let mut collected = HashMap::with_capacity_and_hasher(record.len(), H::default());
    for (key, value) in record {
        match function(value) {
            Either::Left(error) => return Either::Left(error),
            Either::Right(mapped) => {
                collected.insert(key, mapped);
            }
        }
    }
    Either::Right(collected)
}

/// Turns a map of `Either`s into an `Either` of a map.
pub fn sequence_record<K, E, A, H>(record: HashMap<K, Either<E, A>, H>) -> Either<E, HashMap<K, A, H>>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    traverse_record(record, |either| either)
}

/// Wraps a single success in a 1-tuple.
pub fn sequence_t1<E, A>(first: Either<E, A>) -> Either<E, (A,)> {
    first.map(|a| (a,))
}

/// Collects two computations into a pair.
///
/// ```rust
/// use fpcomb::control::{either, Either};
///
/// let pair: Either<String, _> = either::sequence_t2(Either::of("a"), Either::of(1));
/// assert_eq!(pair, Either::Right(("a", 1)));
/// ```
pub fn sequence_t2<E, A, B>(first: Either<E, A>, second: Either<E, B>) -> Either<E, (A, B)> {
    first.product(second)
}

/// Collects three computations into a triple.
pub fn sequence_t3<E, A, B, C>(
    first: Either<E, A>,
    second: Either<E, B>,
    third: Either<E, C>,
) -> Either<E, (A, B, C)> {
    first
        .product(second)
        .map2(third, |(a, b), c| (a, b, c))
}

/// Collects four computations into a 4-tuple.
pub fn sequence_t4<E, A, B, C, D>(
    first: Either<E, A>,
    second: Either<E, B>,
    third: Either<E, C>,
    fourth: Either<E, D>,
) -> Either<E, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}
