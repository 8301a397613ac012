#![cfg(feature = "effect")]
//! Scenario tests for `StateReaderIOEither`: a tiny interpreter that keeps
//! a stack in the state and reads its limits from the environment.

use fpcomb::control::Either;
use fpcomb::eff;
use fpcomb::effect::{IOEither, State, StateReaderIOEither, state_reader_io_either};
use rstest::rstest;

#[derive(Clone, Debug)]
struct Limits {
    max_depth: usize,
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Push(i64),
    Add,
    Mul,
}

type Machine<A> = StateReaderIOEither<Vec<i64>, Limits, String, A>;

fn push(value: i64) -> Machine<()> {
    Machine::asks(|limits: Limits| limits.max_depth).chain(move |max_depth| {
        Machine::get().chain(move |stack: Vec<i64>| {
            if stack.len() >= max_depth {
                Machine::left(format!("stack overflow at depth {max_depth}"))
            } else {
                Machine::modify(move |mut stack: Vec<i64>| {
                    stack.push(value);
                    stack
                })
            }
        })
    })
}

fn pop() -> Machine<i64> {
    Machine::get().chain(|mut stack: Vec<i64>| match stack.pop() {
        Some(top) => Machine::put(stack).map(move |()| top),
        None => Machine::left("stack underflow".to_string()),
    })
}

fn binary(operation: fn(i64, i64) -> i64) -> Machine<()> {
    eff! {
        right <= pop();
        left <= pop();
        push(operation(left, right))
    }
}

fn execute(op: Op) -> Machine<()> {
    match op {
        Op::Push(value) => push(value),
        Op::Add => binary(|a, b| a + b),
        Op::Mul => binary(|a, b| a * b),
    }
}

fn program(ops: Vec<Op>) -> Machine<i64> {
    state_reader_io_either::traverse_array(ops, execute).chain(|_| pop())
}

#[rstest]
#[case(vec![Op::Push(2), Op::Push(3), Op::Add, Op::Push(4), Op::Mul], 8, Either::Right(20))]
#[case(vec![Op::Add], 8, Either::Left("stack underflow".to_string()))]
#[case(vec![Op::Push(1), Op::Push(2), Op::Push(3)], 2, Either::Left("stack overflow at depth 2".to_string()))]
fn interprets(#[case] ops: Vec<Op>, #[case] max_depth: usize, #[case] expected: Either<String, i64>) {
    let outcome = program(ops).eval(Vec::new()).run(Limits { max_depth }).run_unsafe();
    assert_eq!(outcome, expected);
}

#[rstest]
fn leftover_stack_is_returned() {
    let machine = state_reader_io_either::sequence_t2(push(1), push(2)).chain(|_| pop());
    assert_eq!(
        machine.provide(vec![9], Limits { max_depth: 4 }).run_unsafe(),
        Either::Right((2, vec![9, 1]))
    );
}

#[rstest]
fn lifts_lower_layers() {
    let counted = Machine::from_state(State::gets(|stack: &Vec<i64>| stack.len()))
        .chain(|depth| Machine::from_io_either(IOEither::right(depth * 10)))
        .chain_either_k(|n| if n > 0 { Either::Right(n) } else { Either::Left("empty".to_string()) });
    let limits = Limits { max_depth: 1 };
    assert_eq!(counted.eval(vec![1, 2]).run(limits.clone()).run_unsafe(), Either::Right(20));
    assert_eq!(counted.exec(vec![]).run(limits).run_unsafe(), Either::Left("empty".to_string()));
}
