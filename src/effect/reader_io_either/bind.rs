//! Do-notation for `ReaderIOEither`.

use std::sync::Arc;

use super::ReaderIOEither;

impl<R, E, S> ReaderIOEither<R, E, S>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    S: Clone + Send + Sync + 'static,
{
    /// Starts a do-notation block with an initial scope.
    pub fn do_(scope: S) -> Self {
        Self::of(scope)
    }

    /// Turns the current value into a scope.
    pub fn bind_to<S2, F>(self, setter: F) -> ReaderIOEither<R, E, S2>
    where
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.map(setter)
    }

    /// Runs a computation that depends on the scope and stores its result.
    /// A `Left` at any step ends the block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    /// use fpcomb::effect::ReaderIOEither;
    ///
    /// #[derive(Clone, Debug, Default, PartialEq)]
    /// struct Scope { base: u32, total: u32 }
    ///
    /// let block = ReaderIOEither::<u32, String, _>::do_(Scope::default())
    ///     .bind(|scope, base| Scope { base, ..scope }, |_| ReaderIOEither::ask())
    ///     .bind(|scope, total| Scope { total, ..scope }, |scope| {
    ///         let base = scope.base;
    ///         ReaderIOEither::asks(move |bonus: u32| base + bonus)
    ///     });
    ///
    /// assert_eq!(block.run(5).run_unsafe(), Either::Right(Scope { base: 5, total: 10 }));
    /// ```
    pub fn bind<S2, T, Setter, F>(self, setter: Setter, function: F) -> ReaderIOEither<R, E, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
        F: Fn(&S) -> ReaderIOEither<R, E, T> + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        self.chain(move |scope| {
            let setter = Arc::clone(&setter);
            function(&scope).map(move |value| setter(scope.clone(), value))
        })
    }

    /// Stores the result of a pure computation on the scope.
    pub fn let_<S2, T, Setter, F>(self, setter: Setter, function: F) -> ReaderIOEither<R, E, S2>
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
    pub fn let_to<S2, T, Setter>(self, setter: Setter, value: T) -> ReaderIOEither<R, E, S2>
    where
        S2: 'static,
        T: Clone + Send + Sync + 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map(move |scope| setter(scope, value.clone()))
    }

    /// Stores the result of an independent computation.
    pub fn ap_s<S2, T, Setter>(self, setter: Setter, computation: ReaderIOEither<R, E, T>) -> ReaderIOEither<R, E, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map2(computation, setter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;

    #[derive(Clone)]
    struct Catalog {
        price: u32,
        stock: u32,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Quote {
        quantity: u32,
        price: u32,
        total: u32,
        note: &'static str,
    }

    fn reserve(quantity: u32) -> ReaderIOEither<Catalog, String, u32> {
        ReaderIOEither::asks(|catalog: Catalog| catalog.stock).chain_either_k(move |stock| {
            if quantity <= stock {
                Either::Right(quantity)
            } else {
                Either::Left(format!("only {stock} in stock"))
            }
        })
    }

    fn quote(quantity: u32) -> ReaderIOEither<Catalog, String, Quote> {
        ReaderIOEither::do_(Quote::default())
            .bind(|scope, quantity| Quote { quantity, ..scope }, move |_| reserve(quantity))
            .ap_s(|scope, price| Quote { price, ..scope }, ReaderIOEither::asks(|catalog: Catalog| catalog.price))
            .let_(|scope, total| Quote { total, ..scope }, |scope| scope.quantity * scope.price)
            .let_to(|scope, note| Quote { note, ..scope }, "firm")
    }

    #[rstest]
    fn quote_in_stock() {
        let catalog = Catalog { price: 4, stock: 10 };
        assert_eq!(
            quote(3).run(catalog).run_unsafe(),
            Either::Right(Quote { quantity: 3, price: 4, total: 12, note: "firm" })
        );
    }

    #[rstest]
    fn quote_out_of_stock() {
        let catalog = Catalog { price: 4, stock: 2 };
        assert_eq!(quote(3).run(catalog).run_unsafe(), Either::Left("only 2 in stock".to_string()));
    }

    #[rstest]
    fn bind_to_starts_from_value() {
        let scope = reserve(1).bind_to(|quantity| Quote { quantity, ..Quote::default() });
        let catalog = Catalog { price: 1, stock: 1 };
        assert_eq!(scope.run(catalog).run_unsafe(), Either::Right(Quote { quantity: 1, ..Quote::default() }));
    }
}
