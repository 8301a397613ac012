//! Do-notation for `IOEither`.

use std::sync::Arc;

use super::IOEither;

impl<E, S> IOEither<E, S>
where
    E: 'static,
    S: Clone + Send + Sync + 'static,
{
    /// Starts a do-notation block with an initial scope.
    pub fn do_(scope: S) -> Self {
        Self::new(move || crate::control::Either::Right(scope.clone()))
    }

    /// Turns the current value into a scope.
    pub fn bind_to<S2, F>(self, setter: F) -> IOEither<E, S2>
    where
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.map(setter)
    }

    /// Runs a computation that depends on the scope and stores its result.
    /// A `Left` at any step ends the block.
    pub fn bind<S2, T, Setter, F>(self, setter: Setter, function: F) -> IOEither<E, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
        F: Fn(&S) -> IOEither<E, T> + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        self.chain(move |scope| {
            let setter = Arc::clone(&setter);
            function(&scope).map(move |value| setter(scope.clone(), value))
        })
    }

    /// Stores the result of a pure computation on the scope.
    pub fn let_<S2, T, Setter, F>(self, setter: Setter, function: F) -> IOEither<E, S2>
    where
        S2: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        self.map(move |scope| {
            let value = function(&scope);
            setter(scope, value)
        })
    }

    /// Stores a constant in the scope.
    pub fn let_to<S2, T, Setter>(self, setter: Setter, value: T) -> IOEither<E, S2>
    where
        S2: 'static,
        T: Clone + Send + Sync + 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map(move |scope| setter(scope, value.clone()))
    }

    /// Stores the result of an independent computation.
    pub fn ap_s<S2, T, Setter>(self, setter: Setter, computation: IOEither<E, T>) -> IOEither<E, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map2(computation, setter)
    }
}
