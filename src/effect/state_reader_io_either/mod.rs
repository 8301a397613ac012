//! `StateReaderIOEither`: state threading on top of [`ReaderIOEither`].
//!
//! `StateReaderIOEither<S, R, E, A>` wraps a function
//! `S -> ReaderIOEither<R, E, (A, S)>`. The state flows left to right
//! through every composite, each step reads the same environment, and a
//! `Left` discards the state and stops the chain.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::effect::StateReaderIOEither;
//!
//! type Budget<A> = StateReaderIOEither<u32, u32, String, A>;
//!
//! // Spends `cost` from the remaining budget, refusing above the per-call
//! // limit held in the environment.
//! fn spend(cost: u32) -> Budget<u32> {
//!     Budget::asks(|limit: u32| limit)
//!         .chain(move |limit| {
//!             if cost > limit {
//!                 Budget::left(format!("{cost} exceeds limit {limit}"))
//!             } else {
//!                 Budget::modify(move |remaining: u32| remaining.saturating_sub(cost)).chain(|()| Budget::get())
//!             }
//!         })
//! }
//!
//! let both = spend(3).chain(|_| spend(4));
//! assert_eq!(both.provide(10, 5).run_unsafe(), Either::Right((3, 3)));
//! assert!(spend(6).provide(10, 5).run_unsafe().is_left());
//! ```

mod bind;
mod traverse;

pub use traverse::{sequence_array, sequence_t1, sequence_t2, sequence_t3, sequence_t4, traverse_array};

use std::fmt;
use std::sync::Arc;

use super::{IO, IOEither, Reader, ReaderIOEither, State};
use crate::control::Either;

/// A state transition that reads `R`, is deferred, and may fail with `E`.
#[must_use = "effects do nothing unless run"]
pub struct StateReaderIOEither<S, R, E, A> {
    run_function: Arc<dyn Fn(S) -> ReaderIOEither<R, E, (A, S)> + Send + Sync>,
}

impl<S, R, E, A> StateReaderIOEither<S, R, E, A>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    A: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a function from the state to a `ReaderIOEither`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> ReaderIOEither<R, E, (A, S)> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Builds a computation from a strict step run each time the innermost
    /// `IOEither` runs.
    fn from_step<F>(step: F) -> Self
    where
        F: Fn(S, R) -> Either<E, (A, S)> + Send + Sync + 'static,
    {
        let step = Arc::new(step);
        Self::new(move |state: S| {
            let step = Arc::clone(&step);
            ReaderIOEither::new(move |environment: R| {
                let step = Arc::clone(&step);
                let state = state.clone();
                IOEither::new(move || step(state.clone(), environment.clone()))
            })
        })
    }

    /// Runs the whole stack at once.
    fn step(&self, state: S, environment: R) -> Either<E, (A, S)> {
        self.run(state).run(environment).run_unsafe()
    }

    /// Yields `value` and leaves the state unchanged.
    pub fn right(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::from_reader_io_either(ReaderIOEither::right(value))
    }

    /// Same as [`StateReaderIOEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::right(value)
    }

    /// Fails with `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        let failed = ReaderIOEither::left(error);
        Self::new(move |_| failed.clone())
    }

    /// Succeeds with a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self::from_step(move |state, _| Either::Right((projection(&state), state)))
    }

    /// Succeeds with a projection of the environment.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::from_step(move |state, environment| Either::Right((function(environment), state)))
    }

    /// Lifts a `State` transition.
    pub fn from_state(transition: State<S, A>) -> Self {
        Self::from_step(move |state, _| Either::Right(transition.run(state)))
    }

    /// Lifts a `ReaderIOEither`, leaving the state unchanged.
    pub fn from_reader_io_either(computation: ReaderIOEither<R, E, A>) -> Self {
        Self::new(move |state: S| computation.clone().map(move |value| (value, state.clone())))
    }

    /// Replays an already computed `Either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Send + Sync,
        A: Clone + Send + Sync,
    {
        Self::from_reader_io_either(ReaderIOEither::from_either(either))
    }

    /// Succeeds with the value produced by `io`.
    pub fn from_io(io: IO<A>) -> Self {
        Self::from_reader_io_either(ReaderIOEither::from_io(io))
    }

    /// Lifts an `IOEither`.
    pub fn from_io_either(io_either: IOEither<E, A>) -> Self {
        Self::from_reader_io_either(ReaderIOEither::from_io_either(io_either))
    }

    /// Succeeds with the result of `reader`.
    pub fn from_reader(reader: Reader<R, A>) -> Self {
        Self::from_reader_io_either(ReaderIOEither::from_reader(reader))
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Supplies the initial state.
    pub fn run(&self, initial_state: S) -> ReaderIOEither<R, E, (A, S)> {
        (self.run_function)(initial_state)
    }

    /// Supplies the initial state, keeping only the value.
    pub fn eval(&self, initial_state: S) -> ReaderIOEither<R, E, A> {
        self.run(initial_state).map(|(value, _)| value)
    }

    /// Supplies the initial state, keeping only the final state.
    pub fn exec(&self, initial_state: S) -> ReaderIOEither<R, E, S> {
        self.run(initial_state).map(|(_, state)| state)
    }

    /// Supplies both the initial state and the environment.
    pub fn provide(self, initial_state: S, environment: R) -> IOEither<E, (A, S)> {
        self.run(initial_state).provide(environment)
    }

    /// Runs in an environment derived from an outer one.
    pub fn local<R2, F>(self, function: F) -> StateReaderIOEither<S, R2, E, A>
    where
        R2: Clone + Send + Sync + 'static,
        F: Fn(R2) -> R + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        StateReaderIOEither::new(move |state: S| {
            let function = Arc::clone(&function);
            self.run(state).local(move |environment| function(environment))
        })
    }

    // =========================================================================
    // Functor / Monad
    // =========================================================================

    /// Transforms the value.
    pub fn map<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        StateReaderIOEither::new(move |state: S| {
            let function = Arc::clone(&function);
            self.run(state).map(move |(value, next)| (function(value), next))
        })
    }

    /// Transforms the error.
    pub fn map_left<E2, F>(self, function: F) -> StateReaderIOEither<S, R, E2, A>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        StateReaderIOEither::new(move |state: S| {
            let function = Arc::clone(&function);
            self.run(state).map_left(move |error| function(error))
        })
    }

    /// Sequences a computation that starts from the state this one left.
    pub fn chain<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> StateReaderIOEither<S, R, E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        StateReaderIOEither::new(move |state: S| {
            let function = Arc::clone(&function);
            self.run(state).chain(move |(value, next)| function(value).run(next))
        })
    }

    /// Alias for [`StateReaderIOEither::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> StateReaderIOEither<S, R, E, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function` for its effects and state change, keeping the
    /// original value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> StateReaderIOEither<S, R, E, B> + Send + Sync + 'static,
    {
        Self::from_step(move |state, environment: R| match self.step(state, environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right((value, next)) => function(&value)
                .step(next, environment)
                .map(|(_, last)| (value, last)),
        })
    }

    /// Chains with a strict `Either`-returning function.
    pub fn chain_either_k<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        StateReaderIOEither::new(move |state: S| {
            let function = Arc::clone(&function);
            self.run(state)
                .chain_either_k(move |(value, next)| function(value).map(|result| (result, next)))
        })
    }

    /// Chains with an `IOEither`-returning function.
    pub fn chain_io_either_k<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> IOEither<E, B> + Send + Sync + 'static,
    {
        self.chain(move |value| StateReaderIOEither::from_io_either(function(value)))
    }

    /// Chains with a `ReaderIOEither`-returning function.
    pub fn chain_reader_io_either_k<B, F>(self, function: F) -> StateReaderIOEither<S, R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderIOEither<R, E, B> + Send + Sync + 'static,
    {
        self.chain(move |value| StateReaderIOEither::from_reader_io_either(function(value)))
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines the values of two computations run one after the other; the
    /// second starts from the state the first left and does not run after a
    /// `Left`.
    pub fn map2<B, C, F>(self, other: StateReaderIOEither<S, R, E, B>, function: F) -> StateReaderIOEither<S, R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        StateReaderIOEither::from_step(move |state, environment: R| match self.step(state, environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right((first, next)) => other
                .step(next, environment)
                .map(|(second, last)| (function(first, second), last)),
        })
    }

    /// Pairs the values of two computations.
    pub fn product<B: 'static>(self, other: StateReaderIOEither<S, R, E, B>) -> StateReaderIOEither<S, R, E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}

impl<S, R, E> StateReaderIOEither<S, R, E, S>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Succeeds with the current state.
    pub fn get() -> Self {
        Self::gets(S::clone)
    }
}

impl<S, R, E> StateReaderIOEither<S, R, E, R>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Succeeds with the environment.
    pub fn ask() -> Self {
        Self::asks(std::convert::identity)
    }
}

impl<S, R, E> StateReaderIOEither<S, R, E, ()>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Replaces the state.
    pub fn put(state: S) -> Self {
        Self::from_step(move |_, _| Either::Right(((), state.clone())))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::from_step(move |state, _| Either::Right(((), modifier(state))))
    }
}

impl<S, R, E, F> StateReaderIOEither<S, R, E, F>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
    F: 'static,
{
    /// Applies the function produced first to the value produced second.
    pub fn ap<B, C>(self, argument: StateReaderIOEither<S, R, E, B>) -> StateReaderIOEither<S, R, E, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<S, R, E, A> Clone for StateReaderIOEither<S, R, E, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<S, R, E, A> fmt::Debug for StateReaderIOEither<S, R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("StateReaderIOEither(<function>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Counter<A> = StateReaderIOEither<u32, u32, String, A>;

    fn increment() -> Counter<()> {
        Counter::modify(|n| n + 1)
    }

    fn guard() -> Counter<u32> {
        Counter::get().chain(|n| {
            Counter::asks(move |max: u32| max).chain_either_k(move |max| {
                if n <= max { Either::Right(n) } else { Either::Left(format!("{n} over {max}")) }
            })
        })
    }

    #[rstest]
    fn state_threads_left_to_right() {
        let program = increment().chain(|()| increment()).chain(|()| guard());
        assert_eq!(program.clone().provide(0, 10).run_unsafe(), Either::Right((2, 2)));
        assert_eq!(program.eval(0).run(10).run_unsafe(), Either::Right(2));
        assert_eq!(program.exec(5).run(10).run_unsafe(), Either::Right(7));
    }

    #[rstest]
    fn left_stops_the_chain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let shared = Arc::clone(&calls);
        let program = guard().chain(move |_| {
            shared.fetch_add(1, Ordering::SeqCst);
            increment()
        });
        assert_eq!(program.provide(11, 10).run_unsafe(), Either::Left("11 over 10".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn put_get_and_ask() {
        let program = Counter::put(9).chain(|()| Counter::get()).product(Counter::ask());
        assert_eq!(program.provide(0, 3).run_unsafe(), Either::Right(((9, 3), 9)));
    }

    #[rstest]
    fn lifting_keeps_state() {
        let from_state: Counter<u32> = Counter::from_state(State::new(|n: u32| (n * 2, n + 1)));
        assert_eq!(from_state.provide(4, 0).run_unsafe(), Either::Right((8, 5)));
        let from_io: Counter<&str> = Counter::from_io(IO::of("io"));
        assert_eq!(from_io.provide(1, 0).run_unsafe(), Either::Right(("io", 1)));
        let from_reader: Counter<u32> = Counter::from_reader(Reader::asks(|max: u32| max + 1));
        assert_eq!(from_reader.provide(1, 5).run_unsafe(), Either::Right((6, 1)));
        let from_either: Counter<u32> = Counter::from_either(Either::Left("no".to_string()));
        assert!(from_either.provide(1, 5).run_unsafe().is_left());
        let from_io_either: Counter<u32> = Counter::from_io_either(IOEither::right(3));
        assert_eq!(from_io_either.provide(1, 5).run_unsafe(), Either::Right((3, 1)));
    }

    #[rstest]
    fn kleisli_helpers() {
        let program = Counter::<u32>::get()
            .chain_io_either_k(|n| IOEither::right(n + 1))
            .chain_reader_io_either_k(|n| ReaderIOEither::asks(move |max: u32| n * max))
            .chain_first(|_| increment());
        assert_eq!(program.provide(2, 10).run_unsafe(), Either::Right((30, 3)));
    }

    #[rstest]
    fn ap_threads_state_through_function_then_argument() {
        let function: Counter<fn(u32) -> u32> = increment().map(|()| (|n: u32| n * 100) as fn(u32) -> u32);
        let program = function.ap(Counter::get());
        assert_eq!(program.provide(1, 0).run_unsafe(), Either::Right((200, 2)));
    }

    #[rstest]
    fn local_and_map_left() {
        let program = guard().local(|text: &'static str| text.len() as u32).map_left(|error| error.len());
        assert_eq!(program.clone().provide(2, "abc").run_unsafe(), Either::Right((2, 2)));
        assert_eq!(program.provide(5, "abc").run_unsafe(), Either::Left(8));
    }
}
