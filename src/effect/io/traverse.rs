//! Traversal and tuple sequencing for `IO`.
//!
//! `function` is applied eagerly while building the result; the produced
//! computations run in order each time the result is run.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::IO;

/// Applies `function` to every element and runs the resulting computations
/// in order.
///
/// # Examples
///
/// ```rust
/// use fpcomb::effect::{io, IO};
///
/// let doubled = io::traverse_array(vec![1, 2, 3], |n| IO::of(n * 2));
/// assert_eq!(doubled.run_unsafe(), vec![2, 4, 6]);
/// ```
pub fn traverse_array<I, A, B, F>(items: I, function: F) -> IO<Vec<B>>
where
    I: IntoIterator<Item = A>,
    B: 'static,
    F: FnMut(A) -> IO<B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Like [`traverse_array`], also passing each element's index.
pub fn traverse_array_with_index<I, A, B, F>(items: I, mut function: F) -> IO<Vec<B>>
where
    I: IntoIterator<Item = A>,
    B: 'static,
    F: FnMut(usize, A) -> IO<B>,
{
    traverse_array(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Runs every computation in order and collects their values.
pub fn sequence_array<I, A>(items: I) -> IO<Vec<A>>
where
    I: IntoIterator<Item = IO<A>>,
    A: 'static,
{
    let computations: Vec<IO<A>> = items.into_iter().collect();
    IO::new(move || computations.iter().map(IO::run_unsafe).collect())
}

/// Applies `function` to every value of a map, keeping the keys.
pub fn traverse_record<K, A, B, F, H>(record: HashMap<K, A, H>, mut function: F) -> IO<HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    B: 'static,
    F: FnMut(A) -> IO<B>,
{
    sequence_record(
        record
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect(),
    )
}

/// Runs every computation of a map and collects their values under the same
/// keys.
pub fn sequence_record<K, A, H>(record: HashMap<K, IO<A>, H>) -> IO<HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    A: 'static,
{
    let entries: Vec<(K, IO<A>)> = record.into_iter().collect();
    IO::new(move || {
        entries
            .iter()
            .map(|(key, computation)| (key.clone(), computation.run_unsafe()))
            .collect()
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<A: 'static>(first: IO<A>) -> IO<(A,)> {
    first.map(|a| (a,))
}

/// Runs two computations in order and pairs their values.
pub fn sequence_t2<A: 'static, B: 'static>(first: IO<A>, second: IO<B>) -> IO<(A, B)> {
    first.product(second)
}

/// Runs three computations in order.
pub fn sequence_t3<A: 'static, B: 'static, C: 'static>(
    first: IO<A>,
    second: IO<B>,
    third: IO<C>,
) -> IO<(A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Runs four computations in order.
pub fn sequence_t4<A: 'static, B: 'static, C: 'static, D: 'static>(
    first: IO<A>,
    second: IO<B>,
    third: IO<C>,
    fourth: IO<D>,
) -> IO<(A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    #[rstest]
    fn runs_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let traced = traverse_array(vec!["a", "b", "c"], |name| {
            let order = Arc::clone(&order);
            IO::new(move || {
                order.lock().unwrap().push(name);
                name.len()
            })
        });
        assert_eq!(traced.run_unsafe(), vec![1, 1, 1]);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn with_index_and_record() {
        let indexed = traverse_array_with_index(vec![10, 20], |index, n| IO::of(index * n));
        assert_eq!(indexed.run_unsafe(), vec![0, 20]);

        let record = HashMap::from([("a", 1), ("b", 2)]);
        let squared = traverse_record(record, |n| IO::of(n * n));
        assert_eq!(squared.run_unsafe(), HashMap::from([("a", 1), ("b", 4)]));
    }

    #[rstest]
    fn tuples() {
        assert_eq!(sequence_t1(IO::of(1)).run_unsafe(), (1,));
        assert_eq!(sequence_t2(IO::of("a"), IO::of(1)).run_unsafe(), ("a", 1));
        assert_eq!(
            sequence_t4(IO::of(1), IO::of(2), IO::of(3), IO::of(4)).run_unsafe(),
            (1, 2, 3, 4)
        );
    }
}
