//! Do-notation for `IO`.
//!
//! The scope is cloned into the continuation of each step, so every
//! binder requires `S: Clone + Send + Sync`.

use std::sync::Arc;

use super::IO;

impl<S> IO<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Starts a do-notation block with an initial scope.
    pub fn do_(scope: S) -> Self {
        Self::of(scope)
    }

    /// Turns the current value into a scope.
    pub fn bind_to<S2, F>(self, setter: F) -> IO<S2>
    where
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.map(setter)
    }

    /// Runs a computation that depends on the scope and stores its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::effect::IO;
    ///
    /// #[derive(Clone, Debug, PartialEq, Default)]
    /// struct Scope { x: i32, y: i32 }
    ///
    /// let io = IO::do_(Scope::default())
    ///     .bind(|scope, x| Scope { x, ..scope }, |_| IO::of(2))
    ///     .bind(|scope, y| Scope { y, ..scope }, |scope| IO::of(scope.x * 10));
    ///
    /// assert_eq!(io.run_unsafe(), Scope { x: 2, y: 20 });
    /// ```
    pub fn bind<S2, T, Setter, F>(self, setter: Setter, function: F) -> IO<S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
        F: Fn(&S) -> IO<T> + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        self.chain(move |scope| {
            let setter = Arc::clone(&setter);
            function(&scope).map(move |value| setter(scope.clone(), value))
        })
    }

    /// Stores the result of a pure computation on the scope.
    pub fn let_<S2, T, Setter, F>(self, setter: Setter, function: F) -> IO<S2>
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
    pub fn let_to<S2, T, Setter>(self, setter: Setter, value: T) -> IO<S2>
    where
        S2: 'static,
        T: Clone + Send + Sync + 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map(move |scope| setter(scope, value.clone()))
    }

    /// Stores the result of an independent computation.
    pub fn ap_s<S2, T, Setter>(self, setter: Setter, computation: IO<T>) -> IO<S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map2(computation, setter)
    }
}
