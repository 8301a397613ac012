#![cfg(feature = "effect")]
//! Property-based tests for the functor and monad laws of `IO` and
//! `IOEither`.

use fpcomb::control::Either;
use fpcomb::effect::{IO, IOEither};
use proptest::prelude::*;

// =============================================================================
// IO
// =============================================================================

proptest! {
    #[test]
    fn prop_io_functor_identity(value: i32) {
        prop_assert_eq!(IO::of(value).map(|x| x).run_unsafe(), value);
    }

    #[test]
    fn prop_io_functor_composition(value: i32) {
        let f = |n: i32| n.wrapping_sub(11);
        let g = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(
            IO::of(value).map(f).map(g).run_unsafe(),
            IO::of(value).map(move |n| g(f(n))).run_unsafe()
        );
    }

    #[test]
    fn prop_io_left_identity(value: i32) {
        let function = |n: i32| IO::of(n.wrapping_mul(2));
        prop_assert_eq!(IO::of(value).chain(function).run_unsafe(), function(value).run_unsafe());
    }

    #[test]
    fn prop_io_right_identity(value: i32) {
        prop_assert_eq!(IO::of(value).chain(IO::of).run_unsafe(), value);
    }

    #[test]
    fn prop_io_associativity(value: i32) {
        let f = |n: i32| IO::of(n.wrapping_add(1));
        let g = |n: i32| IO::of(n.wrapping_mul(2));
        prop_assert_eq!(
            IO::of(value).chain(f).chain(g).run_unsafe(),
            IO::of(value).chain(move |x| f(x).chain(g)).run_unsafe()
        );
    }

    #[test]
    fn prop_io_ap_matches_map2(a: i32, b: i32) {
        let applied = IO::of(move |x: i32| x.wrapping_add(a)).ap(IO::of(b));
        prop_assert_eq!(applied.run_unsafe(), IO::of(a).map2(IO::of(b), i32::wrapping_add).run_unsafe());
    }
}

// =============================================================================
// IOEither
// =============================================================================

fn checked(n: i32) -> IOEither<String, i32> {
    IOEither::from_either(if n < 0 { Either::Left(format!("{n} is negative")) } else { Either::Right(n / 3) })
}

proptest! {
    #[test]
    fn prop_io_either_left_identity(value: i32) {
        prop_assert_eq!(IOEither::of(value).chain(checked).run_unsafe(), checked(value).run_unsafe());
    }

    #[test]
    fn prop_io_either_right_identity(value: i32) {
        prop_assert_eq!(checked(value).chain(IOEither::of).run_unsafe(), checked(value).run_unsafe());
    }

    #[test]
    fn prop_io_either_associativity(value: i32) {
        let g = |n: i32| IOEither::<String, i32>::of(n.wrapping_sub(5));
        prop_assert_eq!(
            checked(value).chain(checked).chain(g).run_unsafe(),
            checked(value).chain(move |n| checked(n).chain(g)).run_unsafe()
        );
    }

    #[test]
    fn prop_io_either_functor_identity(value: i32) {
        prop_assert_eq!(checked(value).map(|x| x).run_unsafe(), checked(value).run_unsafe());
    }

    #[test]
    fn prop_io_either_left_short_circuits(error in "[a-z]{1,6}") {
        let failed = IOEither::<String, i32>::left(error.clone());
        let chained = failed.chain(|_| -> IOEither<String, i32> { panic!("continuation ran for Left") });
        prop_assert_eq!(chained.run_unsafe(), Either::Left(error));
    }

    #[test]
    fn prop_ap_seq_and_ap_par_agree_on_rights(a: i32, b: i32) {
        let function = IOEither::<String, _>::of(move |x: i32| x.wrapping_mul(a));
        prop_assert_eq!(
            function.clone().ap_seq(IOEither::of(b)).run_unsafe(),
            function.ap_par(IOEither::of(b)).run_unsafe()
        );
    }
}
