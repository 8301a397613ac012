//! Lens-based do-notation for `ReaderIOEither`.

use std::sync::Arc;

use super::ReaderIOEither;
use crate::optics::Lens;

impl<R, E, S> ReaderIOEither<R, E, S>
where
    R: Clone + Send + Sync + 'static,
    E: 'static,
    S: Clone + Send + Sync + 'static,
{
    /// Replaces the field focused by `lens` with the result of a computation
    /// that receives the field's current value.
    pub fn bind_l<A, L, F>(self, lens: L, function: F) -> Self
    where
        A: 'static,
        L: Lens<S, A> + Send + Sync + 'static,
        F: Fn(&A) -> ReaderIOEither<R, E, A> + Send + Sync + 'static,
    {
        let lens = Arc::new(lens);
        self.chain(move |scope| {
            let lens = Arc::clone(&lens);
            function(lens.get(&scope)).map(move |value| lens.set(scope.clone(), value))
        })
    }

    /// Replaces the field focused by `lens` with a pure function of it.
    pub fn let_l<A, L, F>(self, lens: L, function: F) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
        F: Fn(&A) -> A + Send + Sync + 'static,
    {
        self.map(move |scope| {
            let value = function(lens.get(&scope));
            lens.set(scope, value)
        })
    }

    /// Sets the field focused by `lens` to a constant.
    pub fn let_to_l<A, L>(self, lens: L, value: A) -> Self
    where
        A: Clone + Send + Sync + 'static,
        L: Lens<S, A> + Send + Sync + 'static,
    {
        self.map(move |scope| lens.set(scope, value.clone()))
    }

    /// Sets the field focused by `lens` from an independent computation.
    pub fn ap_s_l<A, L>(self, lens: L, computation: ReaderIOEither<R, E, A>) -> Self
    where
        A: 'static,
        L: Lens<S, A> + Send + Sync + 'static,
    {
        self.map2(computation, move |scope, value| lens.set(scope, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::lens;
    use rstest::rstest;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Request {
        host: String,
        path: String,
        attempts: u32,
    }

    #[rstest]
    fn lens_binders_read_environment() {
        let request = ReaderIOEither::<String, String, _>::do_(Request::default())
            .ap_s_l(lens!(Request, host), ReaderIOEither::ask())
            .let_to_l(lens!(Request, path), "/status".to_string())
            .let_l(lens!(Request, attempts), |attempts| attempts + 1)
            .bind_l(lens!(Request, path), |path| {
                let path = path.clone();
                ReaderIOEither::asks(move |host: String| format!("{path}?from={host}"))
            });
        assert_eq!(
            request.run("edge".to_string()).run_unsafe(),
            Either::Right(Request {
                host: "edge".to_string(),
                path: "/status?from=edge".to_string(),
                attempts: 1,
            })
        );
    }

    #[rstest]
    fn bind_l_failure_ends_block() {
        let request = ReaderIOEither::<(), &str, _>::do_(Request::default())
            .bind_l(lens!(Request, attempts), |_| ReaderIOEither::left("refused"));
        assert_eq!(request.run(()).run_unsafe(), Either::Left("refused"));
    }
}
