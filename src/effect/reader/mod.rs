//! Reader - a computation that depends on an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step, which makes it a lightweight form of
//! dependency injection: the environment is only supplied once, by
//! [`Reader::run`].
//!
//! # Laws
//!
//! - `Reader::ask().run(r) == r`
//! - `m.local(|r| r) == m`
//! - `m.local(g).local(f) == m.local(|r| g(f(r)))`
//!
//! plus the usual functor and monad laws.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let host = Reader::asks(|config: Config| config.host);
//! let port = Reader::asks(|config: Config| config.port);
//! let address = host.map2(port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

mod bind;
mod traverse;

pub use traverse::{
    sequence_array, sequence_record, sequence_t1, sequence_t2, sequence_t3, sequence_t4,
    traverse_array, traverse_array_with_index, traverse_record,
};

use std::fmt;
use std::sync::Arc;

use crate::typeclass::{Monoid, Semigroup};

/// A computation reading an environment `R` to produce an `A`.
#[must_use = "effects do nothing unless run"]
pub struct Reader<R, A> {
    run_function: Arc<dyn Fn(R) -> A + Send + Sync>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Wraps a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// A reader that ignores the environment.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Projects the environment.
    pub fn asks<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::new(function)
    }

    /// Supplies the environment.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Runs this reader in an environment derived from an outer one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::ask().map(|n| n * 2);
    /// let from_text = doubled.local(|text: &str| text.len() as i32);
    /// assert_eq!(from_text.run("abc"), 6);
    /// ```
    pub fn local<R2, F>(self, function: F) -> Reader<R2, A>
    where
        R2: 'static,
        F: Fn(R2) -> R + Send + Sync + 'static,
    {
        Reader::new(move |environment| self.run(function(environment)))
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }
}

impl<R: Clone + 'static, A: 'static> Reader<R, A> {
    /// Sequences a reader that depends on this one's result; both see the
    /// same environment.
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        Reader::new(move |environment: R| function(self.run(environment.clone())).run(environment))
    }

    /// Alias for [`Reader::chain`].
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Alias for [`Reader::chain`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `function` on the result and discards its value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        B: 'static,
        F: Fn(&A) -> Reader<R, B> + Send + Sync + 'static,
    {
        Self::new(move |environment: R| {
            let value = self.run(environment.clone());
            function(&value).run(environment);
            value
        })
    }

    /// Combines the results of two readers run against the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        Reader::new(move |environment: R| {
            let first = self.run(environment.clone());
            function(first, other.run(environment))
        })
    }

    /// Pairs the results of two readers.
    pub fn product<B: 'static>(self, other: Reader<R, B>) -> Reader<R, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}

impl<R: 'static> Reader<R, R> {
    /// The environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R: Clone + 'static, A: 'static> Reader<R, Reader<R, A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Reader<R, A> {
        self.chain(|inner| inner)
    }
}

impl<R: Clone + 'static, F: 'static> Reader<R, F> {
    /// Applies the function produced by this reader to another reader's
    /// result.
    pub fn ap<B, C>(self, argument: Reader<R, B>) -> Reader<R, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

impl<R: Clone + 'static, A: Semigroup + 'static> Semigroup for Reader<R, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<R: Clone + 'static, A: Monoid + 'static> Monoid for Reader<R, A> {
    fn empty() -> Self {
        Self::new(|_| A::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[derive(Clone)]
    struct Settings {
        retries: u32,
        verbose: bool,
    }

    fn settings() -> Settings {
        Settings { retries: 3, verbose: true }
    }

    #[rstest]
    fn ask_returns_environment() {
        assert_eq!(Reader::<i32, i32>::ask().run(42), 42);
    }

    #[rstest]
    fn of_ignores_environment() {
        let constant: Reader<i32, &str> = Reader::of("constant");
        assert_eq!(constant.run(0), "constant");
        assert_eq!(constant.run(100), "constant");
    }

    #[rstest]
    fn chain_shares_environment() {
        let retries = Reader::asks(|settings: Settings| settings.retries);
        let summary = retries.chain(|retries| {
            Reader::asks(move |settings: Settings| format!("{retries} retries, verbose={}", settings.verbose))
        });
        assert_eq!(summary.run(settings()), "3 retries, verbose=true");
    }

    #[rstest]
    fn local_identity_and_composition() {
        let reader: Reader<i32, i32> = Reader::ask().map(|n| n * 2);
        assert_eq!(reader.clone().local(|n: i32| n).run(5), reader.run(5));
        let nested = reader.clone().local(|n: i32| n + 1).local(|n: i32| n * 10);
        let composed = reader.local(|n: i32| n * 10 + 1);
        assert_eq!(nested.run(2), composed.run(2));
    }

    #[rstest]
    fn ap_and_product() {
        let add_environment = Reader::asks(|n: i32| move |x: i32| x + n);
        assert_eq!(add_environment.ap(Reader::of(1)).run(10), 11);
        assert_eq!(Reader::<i32, i32>::ask().product(Reader::of("x")).run(3), (3, "x"));
    }

    #[rstest]
    fn flatten_and_chain_first() {
        let nested: Reader<i32, Reader<i32, i32>> = Reader::of(Reader::ask());
        assert_eq!(nested.flatten().run(7), 7);
        let kept = Reader::<i32, i32>::ask().chain_first(|n| Reader::of(n * 100));
        assert_eq!(kept.run(4), 4);
    }

    #[rstest]
    fn monoid_combines_pointwise() {
        let total = Reader::asks(Sum).combine(Reader::of(Sum(1)));
        assert_eq!(total.run(5), Sum(6));
        assert_eq!(Reader::<i32, Sum<i32>>::empty().run(5), Sum(0));
    }
}
