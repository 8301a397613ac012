#![cfg(feature = "effect")]
//! Property-based tests for the monoid laws: the numeric wrappers, the
//! applicative monoid of the effect types, and the alt and alternative
//! monoid instances.

use fpcomb::control::{Either, either};
use fpcomb::effect::{IO, IOEither, io_either};
use fpcomb::retry::{RetryPolicy, RetryStatus};
use fpcomb::typeclass::{Max, Monoid, MonoidInstance, Semigroup, Sum};
use proptest::prelude::*;
use std::time::Duration;

fn either_strategy() -> impl Strategy<Value = Either<String, Sum<i32>>> {
    prop_oneof![
        any::<i16>().prop_map(|n| Either::Right(Sum(i32::from(n)))),
        "[a-z]{1,4}".prop_map(Either::Left),
    ]
}

fn assert_identity<T: Clone + PartialEq + std::fmt::Debug + 'static>(
    monoid: &MonoidInstance<T>,
    value: T,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(monoid.concat(monoid.empty(), value.clone()), value.clone());
    prop_assert_eq!(monoid.concat(value.clone(), monoid.empty()), value);
    Ok(())
}

proptest! {
    #[test]
    fn prop_sum_laws(a: i16, b: i16, c: i16) {
        let (a, b, c) = (Sum(i32::from(a)), Sum(i32::from(b)), Sum(i32::from(c)));
        prop_assert_eq!(Sum::empty().combine(a), a);
        prop_assert_eq!(a.combine(Sum::empty()), a);
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    #[test]
    fn prop_max_associativity(a: i32, b: i32, c: i32) {
        prop_assert_eq!(Max(a).combine(Max(b)).combine(Max(c)), Max(a).combine(Max(b).combine(Max(c))));
        prop_assert_eq!(Max::empty().combine(Max(a)), Max(a));
    }

    #[test]
    fn prop_io_applicative_monoid(a: i16, b: i16, c: i16) {
        let io = |n: i16| IO::of(Sum(i32::from(n)));
        prop_assert_eq!(IO::empty().combine(io(a)).run_unsafe(), io(a).run_unsafe());
        prop_assert_eq!(
            io(a).combine(io(b)).combine(io(c)).run_unsafe(),
            io(a).combine(io(b).combine(io(c))).run_unsafe()
        );
    }

    #[test]
    fn prop_either_alt_monoid(
        a in either_strategy(),
        b in either_strategy(),
        c in either_strategy(),
    ) {
        let monoid = either::alt_monoid(Either::Left("zero".to_string()));
        prop_assert_eq!(monoid.concat(monoid.empty(), a.clone()), a.clone());
        if a.is_right() {
            assert_identity(&monoid, a.clone())?;
        }
        prop_assert_eq!(
            monoid.concat(monoid.concat(a.clone(), b.clone()), c.clone()),
            monoid.concat(a, monoid.concat(b, c))
        );
    }

    #[test]
    fn prop_either_alternative_monoid(
        a in either_strategy(),
        b in either_strategy(),
        c in either_strategy(),
    ) {
        let monoid = either::alternative_monoid::<String, Sum<i32>>();
        if a.is_right() {
            assert_identity(&monoid, a.clone())?;
        }
        prop_assert_eq!(
            monoid.concat(monoid.concat(a.clone(), b.clone()), c.clone()),
            monoid.concat(a, monoid.concat(b, c))
        );
    }

    #[test]
    fn prop_io_either_alt_monoid(
        a in either_strategy(),
        b in either_strategy(),
        c in either_strategy(),
    ) {
        let monoid = io_either::alt_monoid(IOEither::left("zero".to_string()));
        let lift = |either: Either<String, Sum<i32>>| IOEither::from_either(either);
        prop_assert_eq!(monoid.concat(monoid.empty(), lift(a.clone())).run_unsafe(), a.clone());
        if a.is_right() {
            prop_assert_eq!(monoid.concat(lift(a.clone()), monoid.empty()).run_unsafe(), a.clone());
        }
        prop_assert_eq!(
            monoid.concat(monoid.concat(lift(a.clone()), lift(b.clone())), lift(c.clone())).run_unsafe(),
            monoid.concat(lift(a), monoid.concat(lift(b), lift(c))).run_unsafe()
        );
    }

    #[test]
    fn prop_retry_policy_monoid(iteration in 0u32..8, limit in 0u32..8, millis in 1u64..50) {
        let status = (0..iteration).fold(RetryStatus::default(), |status, _| status.advance(Duration::from_millis(millis)));
        let policy = RetryPolicy::limit_retries(limit).combine(RetryPolicy::constant_delay(Duration::from_millis(millis)));
        prop_assert_eq!(RetryPolicy::empty().combine(policy.clone()).delay(&status), policy.delay(&status));
        prop_assert_eq!(policy.clone().combine(RetryPolicy::empty()).delay(&status), policy.delay(&status));
    }
}
