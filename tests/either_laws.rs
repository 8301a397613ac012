#![cfg(feature = "control")]
//! Property-based tests for the functor and monad laws of `Either`, plus
//! the left short-circuit guarantee.

use fpcomb::control::Either;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,8}".prop_map(Either::Left),
    ]
}

fn halve(n: i32) -> Either<String, i32> {
    if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
}

fn decrement(n: i32) -> Either<String, i32> {
    n.checked_sub(1).map_or_else(|| Either::Left("underflow".to_string()), Either::Right)
}

proptest! {
    #[test]
    fn prop_functor_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().map(|x| x), either);
    }

    #[test]
    fn prop_functor_composition(either in either_strategy()) {
        let f = |n: i32| n.wrapping_add(3);
        let g = |n: i32| n.wrapping_mul(7);
        prop_assert_eq!(either.clone().map(f).map(g), either.map(move |n| g(f(n))));
    }

    #[test]
    fn prop_left_identity(value: i32) {
        prop_assert_eq!(Either::of(value).chain(halve), halve(value));
    }

    #[test]
    fn prop_right_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().chain(Either::of), either);
    }

    #[test]
    fn prop_associativity(either in either_strategy()) {
        let left = either.clone().chain(halve).chain(decrement);
        let right = either.chain(|n| halve(n).chain(decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_left_short_circuits(error in "[a-z]{1,8}") {
        let failed: Either<String, i32> = Either::Left(error.clone());
        let mapped = failed.clone().map(|_| -> i32 { panic!("map called on Left") });
        let chained = failed.clone().chain(|_| -> Either<String, i32> { panic!("chain called on Left") });
        let applied = failed.map(|n: i32| move |m: i32| n + m).ap(Either::<String, i32>::Right(1));
        prop_assert_eq!(mapped, Either::Left(error.clone()));
        prop_assert_eq!(chained, Either::Left(error.clone()));
        prop_assert_eq!(applied, Either::Left(error));
    }

    #[test]
    fn prop_swap_is_involution(either in either_strategy()) {
        prop_assert_eq!(either.clone().swap().swap(), either);
    }

    #[test]
    fn prop_result_conversion_round_trips(either in either_strategy()) {
        let result: Result<i32, String> = either.clone().into_result();
        prop_assert_eq!(Either::from(result), either);
    }
}
