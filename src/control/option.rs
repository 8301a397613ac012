//! Helpers for `Option` that the standard library does not provide.
//!
//! `Option` already is the option effect: `map`, `and_then`, `or_else` and
//! friends come from `std`. This module only adds traversal, tuple
//! sequencing and the conversions used by the rest of the crate.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Either;

/// Keeps `value` when `predicate` holds.
///
/// ```rust
/// use fpcomb::control::option;
///
/// assert_eq!(option::from_predicate(4, |n| n % 2 == 0), Some(4));
/// assert_eq!(option::from_predicate(5, |n| n % 2 == 0), None);
/// ```
pub fn from_predicate<A, P>(value: A, predicate: P) -> Option<A>
where
    P: FnOnce(&A) -> bool,
{
    predicate(&value).then_some(value)
}

/// Collapses an `Option` with one function per case.
pub fn fold<A, B, N, S>(option: Option<A>, on_none: N, on_some: S) -> B
where
    N: FnOnce() -> B,
    S: FnOnce(A) -> B,
{
    option.map_or_else(on_none, on_some)
}

/// Converts into an [`Either`], using `on_none` for the missing case.
pub fn to_either<E, A, F>(option: Option<A>, on_none: F) -> Either<E, A>
where
    F: FnOnce() -> E,
{
    Either::from_option(option, on_none)
}

/// Applies `function` to every element; `None` as soon as one yields `None`.
pub fn traverse_array<I, A, B, F>(items: I, function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    items.into_iter().map(function).collect()
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, A, B, F>(items: I, mut function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(usize, A) -> Option<B>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| function(index, item))
        .collect()
}

/// `Some` of all values when every element is `Some`.
///
/// ```rust
/// use fpcomb::control::option;
///
/// assert_eq!(option::sequence_array(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(option::sequence_array(vec![Some(1), None]), None);
/// ```
pub fn sequence_array<I, A>(items: I) -> Option<Vec<A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    items.into_iter().collect()
}

/// Applies `function` to every value of a map, keeping the keys.
pub fn traverse_record<K, A, B, F, H>(record: HashMap<K, A, H>, mut function: F) -> Option<HashMap<K, B, H>>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
    F: FnMut(A) -> Option<B>,
{
    record
        .into_iter()
        .map(|(key, value)| function(value).map(|mapped| (key, mapped)))
        .collect()
}

/// `Some` of the whole map when every value is `Some`.
pub fn sequence_record<K, A, H>(record: HashMap<K, Option<A>, H>) -> Option<HashMap<K, A, H>>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    traverse_record(record, |value| value)
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<A>(first: Option<A>) -> Option<(A,)> {
    first.map(|a| (a,))
}

/// Pairs two options.
pub fn sequence_t2<A, B>(first: Option<A>, second: Option<B>) -> Option<(A, B)> {
    first.zip(second)
}

/// Collects three options into a triple.
pub fn sequence_t3<A, B, C>(first: Option<A>, second: Option<B>, third: Option<C>) -> Option<(A, B, C)> {
    Some((first?, second?, third?))
}

/// Collects four options into a 4-tuple.
pub fn sequence_t4<A, B, C, D>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    fourth: Option<D>,
) -> Option<(A, B, C, D)> {
    Some((first?, second?, third?, fourth?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn traverse_stops_at_first_none() {
        let mut visited = Vec::new();
        let result = traverse_array(vec![1, 2, 3], |n| {
            visited.push(n);
            (n != 2).then_some(n)
        });
        assert_eq!(result, None);
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn traverse_with_index() {
        let result = traverse_array_with_index(vec!['a', 'b'], |index, c| Some(format!("{c}{index}")));
        assert_eq!(result, Some(vec!["a0".to_string(), "b1".to_string()]));
    }

    #[rstest]
    fn sequence_record_keeps_keys() {
        let record = HashMap::from([("x", Some(1)), ("y", Some(2))]);
        assert_eq!(sequence_record(record), Some(HashMap::from([("x", 1), ("y", 2)])));
        let missing = HashMap::from([("x", Some(1)), ("y", None)]);
        assert_eq!(sequence_record(missing), None);
    }

    #[rstest]
    #[case(Some(1), Some("b"), Some((1, "b")))]
    #[case(None, Some("b"), None)]
    #[case(Some(1), None, None)]
    fn sequence_pairs(#[case] first: Option<i32>, #[case] second: Option<&str>, #[case] expected: Option<(i32, &str)>) {
        assert_eq!(sequence_t2(first, second), expected);
    }

    #[rstest]
    fn sequence_larger_tuples() {
        assert_eq!(sequence_t1(Some(1)), Some((1,)));
        assert_eq!(sequence_t3(Some(1), Some(2), Some(3)), Some((1, 2, 3)));
        assert_eq!(sequence_t4(Some(1), Some(2), None::<i32>, Some(4)), None);
    }

    #[rstest]
    fn fold_and_to_either() {
        assert_eq!(fold(Some(2), || 0, |n| n * 10), 20);
        assert_eq!(fold(None::<i32>, || 0, |n| n * 10), 0);
        assert_eq!(to_either(None::<i32>, || "missing"), Either::Left("missing"));
        assert_eq!(to_either(Some(1), || "missing"), Either::<&str, i32>::Right(1));
    }
}
