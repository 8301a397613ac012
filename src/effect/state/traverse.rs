//! Traversal and tuple sequencing for `State`; the state flows through the
//! transitions in order.

use super::State;

/// Applies `function` to every element and threads the state through the
/// resulting transitions.
///
/// # Examples
///
/// ```rust
/// use fpcomb::effect::{state, State};
///
/// let numbered = state::traverse_array(vec!["a", "b"], |name| {
///     State::new(move |next: u32| (format!("{next}:{name}"), next + 1))
/// });
/// assert_eq!(numbered.run(1), (vec!["1:a".to_string(), "2:b".to_string()], 3));
/// ```
pub fn traverse_array<I, T, S, B, F>(items: I, function: F) -> State<S, Vec<B>>
where
    I: IntoIterator<Item = T>,
    S: 'static,
    B: 'static,
    F: FnMut(T) -> State<S, B>,
{
    sequence_array(items.into_iter().map(function).collect::<Vec<_>>())
}

/// Runs every transition in order, collecting their values.
pub fn sequence_array<I, S, A>(items: I) -> State<S, Vec<A>>
where
    I: IntoIterator<Item = State<S, A>>,
    S: 'static,
    A: 'static,
{
    let transitions: Vec<State<S, A>> = items.into_iter().collect();
    State::new(move |initial: S| {
        let mut values = Vec::with_capacity(transitions.len());
        let mut state = initial;
        for transition in &transitions {
            let (value, next) = transition.run(state);
            values.push(value);
            state = next;
        }
        (values, state)
    })
}

/// Wraps a single value in a 1-tuple.
pub fn sequence_t1<S: 'static, A: 'static>(first: State<S, A>) -> State<S, (A,)> {
    first.map(|a| (a,))
}

/// Pairs two values.
pub fn sequence_t2<S: 'static, A: 'static, B: 'static>(first: State<S, A>, second: State<S, B>) -> State<S, (A, B)> {
    first.product(second)
}

/// Collects three values.
pub fn sequence_t3<S: 'static, A: 'static, B: 'static, C: 'static>(
    first: State<S, A>,
    second: State<S, B>,
    third: State<S, C>,
) -> State<S, (A, B, C)> {
    first.product(second).map2(third, |(a, b), c| (a, b, c))
}

/// Collects four values.
pub fn sequence_t4<S: 'static, A: 'static, B: 'static, C: 'static, D: 'static>(
    first: State<S, A>,
    second: State<S, B>,
    third: State<S, C>,
    fourth: State<S, D>,
) -> State<S, (A, B, C, D)> {
    sequence_t3(first, second, third).map2(fourth, |(a, b, c), d| (a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tick() -> State<u32, u32> {
        State::new(|n| (n, n + 1))
    }

    #[rstest]
    fn sequence_threads_state() {
        assert_eq!(sequence_array(vec![tick(), tick(), tick()]).run(5), (vec![5, 6, 7], 8));
        assert_eq!(sequence_array(Vec::<State<u32, u32>>::new()).run(5), (vec![], 5));
    }

    #[rstest]
    fn tuples() {
        assert_eq!(sequence_t1(tick()).run(0), ((0,), 1));
        assert_eq!(sequence_t2(tick(), State::of("x")).run(0), ((0, "x"), 1));
        assert_eq!(sequence_t4(tick(), tick(), tick(), tick()).run(0), ((0, 1, 2, 3), 4));
    }
}
