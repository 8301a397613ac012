//! Do-notation for `State`.

use std::sync::Arc;

use super::State;

impl<St, S> State<St, S>
where
    St: 'static,
    S: Clone + Send + Sync + 'static,
{
    /// Starts a do-notation block with an initial scope.
    pub fn do_(scope: S) -> Self {
        Self::of(scope)
    }

    /// Turns the current value into a scope.
    pub fn bind_to<S2, F>(self, setter: F) -> State<St, S2>
    where
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.map(setter)
    }

    /// Runs a transition that depends on the scope and stores its value.
    pub fn bind<S2, T, Setter, F>(self, setter: Setter, function: F) -> State<St, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
        F: Fn(&S) -> State<St, T> + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        self.chain(move |scope| {
            let setter = Arc::clone(&setter);
            function(&scope).map(move |value| setter(scope.clone(), value))
        })
    }

    /// Stores the result of a pure computation on the scope.
    pub fn let_<S2, T, Setter, F>(self, setter: Setter, function: F) -> State<St, S2>
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
    pub fn let_to<S2, T, Setter>(self, setter: Setter, value: T) -> State<St, S2>
    where
        S2: 'static,
        T: Clone + Send + Sync + 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map(move |scope| setter(scope, value.clone()))
    }

    /// Stores the value of a transition that does not read the scope.
    pub fn ap_s<S2, T, Setter>(self, setter: Setter, transition: State<St, T>) -> State<St, S2>
    where
        S2: 'static,
        T: 'static,
        Setter: Fn(S, T) -> S2 + Send + Sync + 'static,
    {
        self.map2(transition, setter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Ids {
        order: u64,
        invoice: u64,
        label: String,
    }

    fn fresh() -> State<u64, u64> {
        State::new(|next| (next, next + 1))
    }

    #[rstest]
    fn allocates_ids_in_order() {
        let ids = State::do_(Ids::default())
            .ap_s(|scope, order| Ids { order, ..scope }, fresh())
            .bind(|scope, invoice| Ids { invoice, ..scope }, |_| fresh())
            .let_(|scope, label| Ids { label, ..scope }, |scope| format!("{}-{}", scope.order, scope.invoice))
            .let_to(|scope, order| Ids { order, ..scope }, 0);
        assert_eq!(ids.run(10), (Ids { order: 0, invoice: 11, label: "10-11".to_string() }, 12));
    }

    #[rstest]
    fn bind_to_keeps_state() {
        let ids = fresh().bind_to(|order| Ids { order, ..Ids::default() });
        assert_eq!(ids.run(3).1, 4);
    }
}
