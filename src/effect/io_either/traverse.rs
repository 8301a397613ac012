//! Traversal and tuple sequencing for `IOEither`.
//!
//! Two evaluation orders are offered:
//!
//! - `*_seq` (also the unsuffixed default): computations run in order and
//!   the first `Left` stops the run; later computations never execute.
//! - `*_par`: every computation runs, in order, and then the first `Left`
//!   in that order is reported. Nothing is spawned; "parallel" only means
//!   the computations are independent of each other's outcome.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::IOEither;
use crate::control::Either;

/// Same as [`traverse_array_seq`].
///
/// # Examples
///
/// ```rust
/// use fpcomb::control::Either;
/// use fpcomb::effect::{io_either, IOEither};
///
/// let checked = io_either::traverse_array(vec![1, 2, 3], |n| {
///     if n < 3 { IOEither::right(n) } else { IOEither::left(format!("{n} too large")) }
/// });
/// assert_eq!(checked.run_unsafe(), Either::Left("3 too large".to_string()));
/// ```
pub fn traverse_array<I, A, E, B, F>(items: I, function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    traverse_array_seq(items, function)
}

/// Maps every element to a computation and runs them in order, stopping at
/// the first `Left`.
pub fn traverse_array_seq<I, A, E, B, F>(items: I, function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    sequence_array_seq(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Maps every element to a computation and runs all of them, reporting the
/// first `Left`.
pub fn traverse_array_par<I, A, E, B, F>(items: I, function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    sequence_array_par(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Same as [`traverse_array_with_index_seq`].
pub fn traverse_array_with_index<I, A, E, B, F>(items: I, function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(usize, A) -> IOEither<E, B>,
{
    traverse_array_with_index_seq(items, function)
}

/// Like [`traverse_array_seq`], also passing each element's index.
pub fn traverse_array_with_index_seq<I, A, E, B, F>(items: I, mut function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(usize, A) -> IOEither<E, B>,
{
    traverse_array_seq(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Like [`traverse_array_par`], also passing each element's index.
pub fn traverse_array_with_index_par<I, A, E, B, F>(items: I, mut function: F) -> IOEither<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    E: 'static,
    B: 'static,
    F: FnMut(usize, A) -> IOEither<E, B>,
{
    traverse_array_par(items.into_iter().enumerate(), |(index, item)| function(index, item))
}

/// Same as [`sequence_array_seq`].
pub fn sequence_array<I, E, A>(items: I) -> IOEither<E, Vec<A>>
where
    I: IntoIterator<Item = IOEither<E, A>>,
    E: 'static,
    A: 'static,
{
    sequence_array_seq(items)
}

/// Runs the computations in order, stopping at the first `Left`.
pub fn sequence_array_seq<I, E, A>(items: I) -> IOEither<E, Vec<A>>
where
    I: IntoIterator<Item = IOEither<E, A>>,
    E: 'static,
    A: 'static,
{
    let computations: Vec<IOEither<E, A>> = items.into_iter().collect();
    IOEither::new(move || crate::control::either::traverse_array(&computations, IOEither::run_unsafe))
}

/// Runs every computation, then reports the first `Left` in order.
pub fn sequence_array_par<I, E, A>(items: I) -> IOEither<E, Vec<A>>
where
    I: IntoIterator<Item = IOEither<E, A>>,
    E: 'static,
    A: 'static,
{
    let computations: Vec<IOEither<E, A>> = items.into_iter().collect();
    IOEither::new(move || {
        let outcomes: Vec<Either<E, A>> = computations.iter().map(IOEither::run_unsafe).collect();
        crate::control::either::sequence_array(outcomes)
    })
}

/// Same as [`traverse_record_seq`].
pub fn traverse_record<K, A, E, B, F, H>(record: HashMap<K, A, H>, function: F) -> IOEither<E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    traverse_record_seq(record, function)
}

/// Maps every value to a computation and runs them, stopping at the first
/// `Left`. The order follows the map's iteration order.
pub fn traverse_record_seq<K, A, E, B, F, H>(record: HashMap<K, A, H>, mut function: F) -> IOEither<E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    sequence_record_seq(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Maps every value to a computation and runs all of them, reporting the
/// first `Left` in the map's iteration order.
pub fn traverse_record_par<K, A, E, B, F, H>(record: HashMap<K, A, H>, mut function: F) -> IOEither<E, HashMap<K, B, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    B: 'static,
    F: FnMut(A) -> IOEither<E, B>,
{
    sequence_record_par(record.into_iter().map(|(key, value)| (key, function(value))).collect())
}

/// Same as [`sequence_record_seq`].
pub fn sequence_record<K, E, A, H>(record: HashMap<K, IOEither<E, A>, H>) -> IOEither<E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    sequence_record_seq(record)
}

/// Runs the computations of a map, stopping at the first `Left`.
pub fn sequence_record_seq<K, E, A, H>(record: HashMap<K, IOEither<E, A>, H>) -> IOEither<E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    let entries: Vec<(K, IOEither<E, A>)> = record.into_iter().collect();
    IOEither::new(move || {
        let mut collected = HashMap::with_capacity_and_hasher(entries.len(), H::default());
        for (key, computation) in &entries {
            match computation.run_unsafe() {
                Either::Left(error) => return Either::Left(error),
                Either::Right(value) => {
                    collected.insert(key.clone(), value);
                }
            }
        }
        Either::Right(collected)
    })
}

/// Runs every computation of a map, then reports the first `Left`.
pub fn sequence_record_par<K, E, A, H>(record: HashMap<K, IOEither<E, A>, H>) -> IOEither<E, HashMap<K, A, H>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    H: BuildHasher + Default + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    let entries: Vec<(K, IOEither<E, A>)> = record.into_iter().collect();
    IOEither::new(move || {
        let outcomes: Vec<(K, Either<E, A>)> = entries
            .iter()
            .map(|(key, computation)| (key.clone(), computation.run_unsafe()))
            .collect();
        crate::control::either::traverse_array(outcomes, |(key, outcome)| outcome.map(|value| (key, value)))
            .map(|pairs| pairs.into_iter().collect())
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<E: 'static, A: 'static>(first: IOEither<E, A>) -> IOEither<E, (A,)> {
    first.map(|a| (a,))
}

/// Runs two computations in order and pairs their values.
pub fn sequence_t2<E: 'static, A: 'static, B: 'static>(
    first: IOEither<E, A>,
    second: IOEither<E, B>,
) -> IOEither<E, (A, B)> {
    first.product(second)
}

/// Runs three computations in order.
pub fn sequence_t3<E: 'static, A: 'static, B: 'static, C: 'static>(
    first: IOEither<E, A>,
    second: IOEither<E, B>,
    third: IOEither<E, C>,
) -> IOEither<E, (A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Runs four computations in order.
pub fn sequence_t4<E: 'static, A: 'static, B: 'static, C: 'static, D: 'static>(
    first: IOEither<E, A>,
    second: IOEither<E, B>,
    third: IOEither<E, C>,
    fourth: IOEither<E, D>,
) -> IOEither<E, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tracked(runs: &Arc<AtomicUsize>, outcome: Either<&'static str, i32>) -> IOEither<&'static str, i32> {
        let runs = Arc::clone(runs);
        IOEither::new(move || {
            runs.fetch_add(1, Ordering::SeqCst);
            outcome
        })
    }

    #[rstest]
    fn seq_stops_at_first_left() {
        let runs = Arc::new(AtomicUsize::new(0));
        let items = vec![
            tracked(&runs, Either::Left("err")),
            tracked(&runs, Either::Right(2)),
            tracked(&runs, Either::Right(3)),
        ];
        assert_eq!(sequence_array(items).run_unsafe(), Either::Left("err"));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn par_runs_everything_and_reports_first_left() {
        let runs = Arc::new(AtomicUsize::new(0));
        let items = vec![
            tracked(&runs, Either::Right(1)),
            tracked(&runs, Either::Left("second")),
            tracked(&runs, Either::Left("third")),
        ];
        assert_eq!(sequence_array_par(items).run_unsafe(), Either::Left("second"));
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    fn traverse_collects_successes() {
        let doubled = traverse_array_par(vec![1, 2], |n| IOEither::<(), i32>::right(n * 2));
        assert_eq!(doubled.run_unsafe(), Either::Right(vec![2, 4]));
        let indexed = traverse_array_with_index(vec![5, 6], |index, n| IOEither::<(), usize>::right(index + n));
        assert_eq!(indexed.run_unsafe(), Either::Right(vec![5, 7]));
    }

    #[rstest]
    fn records() {
        let record = HashMap::from([("a", 1), ("b", 2)]);
        let ok = traverse_record(record.clone(), |n| IOEither::<&str, i32>::right(n + 1));
        assert_eq!(ok.run_unsafe(), Either::Right(HashMap::from([("a", 2), ("b", 3)])));

        let failing = traverse_record_par(record, |n| {
            if n == 2 { IOEither::left("two") } else { IOEither::right(n) }
        });
        assert_eq!(failing.run_unsafe(), Either::Left("two"));

        let sequenced = sequence_record_seq(HashMap::from([("only", IOEither::<(), i32>::right(1))]));
        assert_eq!(sequenced.run_unsafe(), Either::Right(HashMap::from([("only", 1)])));
        let sequenced_par = sequence_record(HashMap::from([("only", IOEither::<&str, i32>::left("x"))]));
        assert_eq!(sequenced_par.run_unsafe(), Either::Left("x"));
    }

    #[rstest]
    fn tuples() {
        assert_eq!(
            sequence_t2(IOEither::<(), _>::of("a"), IOEither::of(1)).run_unsafe(),
            Either::Right(("a", 1))
        );
        assert_eq!(sequence_t1(IOEither::<(), _>::of(1)).run_unsafe(), Either::Right((1,)));
        let failed = sequence_t4(
            IOEither::<&str, i32>::of(1),
            IOEither::<&str, i32>::of(2),
            IOEither::<&str, i32>::left("third"),
            IOEither::<&str, i32>::of(4),
        );
        assert_eq!(failed.run_unsafe(), Either::Left("third"));
        assert_eq!(
            sequence_t3(IOEither::<(), _>::of(1), IOEither::of('x'), IOEither::of(true)).run_unsafe(),
            Either::Right((1, 'x', true))
        );
    }
}
