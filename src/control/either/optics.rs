//! Lens- and prism-based helpers for `Either`.

use super::Either;
use crate::optics::{Lens, Prism};

impl<E, A> Either<E, A> {
    /// Extracts the variant focused by `prism`, failing with `on_none`
    /// when `source` is a different variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    /// use fpcomb::prism;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum Message { Text(String), Ping(u8) }
    ///
    /// let text = prism!(Message, Text);
    /// let ok: Either<&str, String> = Either::from_prism(&text, Message::Text("hi".into()), || "not text");
    /// let failed: Either<&str, String> = Either::from_prism(&text, Message::Ping(1), || "not text");
    ///
    /// assert_eq!(ok, Either::Right("hi".to_string()));
    /// assert_eq!(failed, Either::Left("not text"));
    /// ```
    pub fn from_prism<S, P, F>(prism: &P, source: S, on_none: F) -> Self
    where
        P: Prism<S, A>,
        F: FnOnce() -> E,
    {
        Self::from_option(prism.preview_owned(source), on_none)
    }
}

impl<E, S> Either<E, S> {
    /// Replaces the field focused by `lens` with the result of `function`,
    /// which receives the field's current value.
    pub fn bind_l<A, L, F>(self, lens: L, function: F) -> Self
    where
        L: Lens<S, A>,
        F: FnOnce(&A) -> Either<E, A>,
    {
        self.chain(|scope| {
            let next = function(lens.get(&scope));
            next.map(|value| lens.set(scope, value))
        })
    }

    /// Replaces the field focused by `lens` with a pure function of it.
    pub fn let_l<A, L, F>(self, lens: L, function: F) -> Self
    where
        L: Lens<S, A>,
        F: FnOnce(&A) -> A,
    {
        self.map(|scope| {
            let value = function(lens.get(&scope));
            lens.set(scope, value)
        })
    }

    /// Sets the field focused by `lens` to a constant.
    pub fn let_to_l<A, L>(self, lens: L, value: A) -> Self
    where
        L: Lens<S, A>,
    {
        self.map(|scope| lens.set(scope, value))
    }

    /// Sets the field focused by `lens` from an independent computation.
    pub fn ap_s_l<A, L>(self, lens: L, computation: Either<E, A>) -> Self
    where
        L: Lens<S, A>,
    {
        self.map2(computation, |scope, value| lens.set(scope, value))
    }
}
