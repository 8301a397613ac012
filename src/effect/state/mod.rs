//! State - a computation threading a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Composition passes the
//! state produced by each step to the next, left to right; the caller
//! supplies the initial state with [`State::run`].
//!
//! # Laws
//!
//! - `State::get().chain(State::put)` leaves the state unchanged
//! - `State::put(s).chain(|()| State::get())` yields `s`
//! - `State::put(s1).chain(move |()| State::put(s2))` is `State::put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::effect::State;
//!
//! fn next_id() -> State<u32, u32> {
//!     State::new(|counter| (counter, counter + 1))
//! }
//!
//! let three_ids = next_id().product(next_id()).map2(next_id(), |(a, b), c| vec![a, b, c]);
//! assert_eq!(three_ids.run(100), (vec![100, 101, 102], 103));
//! ```

mod bind;
mod traverse;

pub use traverse::{sequence_array, sequence_t1, sequence_t2, sequence_t3, sequence_t4, traverse_array};

use std::fmt;
use std::sync::Arc;

/// A state transition `S -> (A, S)`.
#[must_use = "effects do nothing unless run"]
pub struct State<S, A> {
    run_function: Arc<dyn Fn(S) -> (A, S) + Send + Sync>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Wraps a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(transition),
        }
    }

    /// Yields `value` without touching the state.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Yields a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Runs the transition, returning the value and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the transition and keeps only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the transition and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Transforms the value.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            (function(value), next)
        })
    }

    /// Sequences a transition that depends on this one's value; it starts
    /// from the state this one left.
    pub fn chain<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            function(value).run(next)
        })
    }

    /// Alias for [`State::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Alias for [`State::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `next` after this transition, discarding this one's value.
    pub fn then<B: 'static>(self, next: State<S, B>) -> State<S, B> {
        self.map2(next, |_, b| b)
    }

    /// Combines the values of two transitions run one after the other.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        State::new(move |state| {
            let (first, intermediate) = self.run(state);
            let (second, last) = other.run(intermediate);
            (function(first, second), last)
        })
    }

    /// Pairs the values of two transitions.
    pub fn product<B: 'static>(self, other: State<S, B>) -> State<S, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Yields the current state.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replaces the state.
    pub fn put(state: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::new(move |_| ((), state.clone()))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S: 'static, A: 'static> State<S, State<S, A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> State<S, A> {
        self.chain(|inner| inner)
    }
}

impl<S: 'static, F: 'static> State<S, F> {
    /// Applies the function produced first to the value produced second.
    pub fn ap<B, C>(self, argument: State<S, B>) -> State<S, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}
