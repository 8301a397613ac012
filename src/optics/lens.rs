//! Lenses: get/set access to one field of a larger value.
//!
//! Lenses plug into do-notation: the `*_l` binders (`bind_l`, `let_l`,
//! `let_to_l`, `ap_s_l`) read and write a scope field through a lens instead
//! of an ad-hoc setter closure.
//!
//! # Laws
//!
//! 1. `GetPut`: `lens.set(s, lens.get(&s).clone()) == s`
//! 2. `PutGet`: `lens.get(&lens.set(s, a)) == &a`
//! 3. `PutPut`: `lens.set(lens.set(s, a1), a2) == lens.set(s, a2)`
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::lens;
//! use fpcomb::optics::Lens;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Server { host: String, port: u16 }
//!
//! let port = lens!(Server, port);
//! let server = Server { host: "localhost".to_string(), port: 80 };
//!
//! assert_eq!(*port.get(&server), 80);
//! assert_eq!(port.modify(server, |p| p + 8000).port, 8080);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Focuses on a single field `A` inside a structure `S`.
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused field.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with a function of its current value.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Focuses further into the field with another lens.
    ///
    /// ```rust
    /// use fpcomb::lens;
    /// use fpcomb::optics::Lens;
    ///
    /// #[derive(Clone)]
    /// struct Address { city: String }
    /// #[derive(Clone)]
    /// struct Person { address: Address }
    ///
    /// let city = lens!(Person, address).compose(lens!(Address, city));
    /// let person = Person { address: Address { city: "Oslo".to_string() } };
    /// assert_eq!(city.get(&person), "Oslo");
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens built from a getter and a setter.
pub struct FunctionLens<S, A, Getter, Setter> {
    getter: Getter,
    setter: Setter,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Getter, Setter> FunctionLens<S, A, Getter, Setter>
where
    Getter: Fn(&S) -> &A,
    Setter: Fn(S, A) -> S,
{
    /// Creates a lens from its two halves.
    pub const fn new(getter: Getter, setter: Setter) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Getter, Setter> Lens<S, A> for FunctionLens<S, A, Getter, Setter>
where
    Getter: Fn(&S) -> &A,
    Setter: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, Getter: Clone, Setter: Clone> Clone for FunctionLens<S, A, Getter, Setter> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Getter, Setter> fmt::Debug for FunctionLens<S, A, Getter, Setter> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses chained: `outer` focuses on `A`, `inner` focuses inside `A`.
pub struct ComposedLens<Outer, Inner, A> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn() -> A>,
}

impl<Outer, Inner, A> ComposedLens<Outer, Inner, A> {
    /// Chains two lenses.
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, Outer, Inner> Lens<S, B> for ComposedLens<Outer, Inner, A>
where
    Outer: Lens<S, A>,
    Inner: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let middle = self.outer.get(&source).clone();
        let updated = self.inner.set(middle, value);
        self.outer.set(source, updated)
    }
}

impl<Outer: Clone, Inner: Clone, A> Clone for ComposedLens<Outer, Inner, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<Outer: fmt::Debug, Inner: fmt::Debug, A> fmt::Debug for ComposedLens<Outer, Inner, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Builds a [`FunctionLens`] for a named struct field.
///
/// The generated closures capture nothing, so the lens is `Copy`,
/// `Send` and `Sync` and can be moved into effect pipelines freely.
///
/// ```text
/// lens!(StructType, field)
/// lens!(StructType<T>, field)
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Inner {
        value: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Outer {
        inner: Inner,
        label: &'static str,
    }

    fn sample() -> Outer {
        Outer {
            inner: Inner { value: 1 },
            label: "x",
        }
    }

    #[rstest]
    fn set_replaces_only_the_field() {
        let label = lens!(Outer, label);
        assert_eq!(label.set(sample(), "y"), Outer { label: "y", ..sample() });
    }

    #[rstest]
    fn composed_lens_reaches_nested_field() {
        let value = lens!(Outer, inner).compose(lens!(Inner, value));
        assert_eq!(*value.get(&sample()), 1);
        let updated = value.modify(sample(), |n| n + 41);
        assert_eq!(updated.inner.value, 42);
        assert_eq!(updated.label, "x");
    }

    #[rstest]
    fn lens_debug_is_opaque() {
        let label = lens!(Outer, label);
        assert_eq!(format!("{label:?}"), "FunctionLens { .. }");
    }
}
