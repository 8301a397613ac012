//! Resource safety for `ReaderIOEither`.

use std::fmt;
use std::sync::Arc;

use super::ReaderIOEither;
use crate::control::Either;
use crate::effect::IOEither;

impl<R, E, B> ReaderIOEither<R, E, B>
where
    R: Clone + Send + Sync + 'static,
    E: fmt::Debug + 'static,
    B: 'static,
{
    /// Acquires a resource, uses it and releases it exactly once, with every
    /// step reading the same environment. The outcome rules are those of
    /// [`IOEither::bracket`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::control::Either;
    /// use fpcomb::effect::ReaderIOEither;
    ///
    /// let length = ReaderIOEither::bracket(
    ///     ReaderIOEither::<String, String, _>::asks(|path: String| format!("handle:{path}")),
    ///     |handle| ReaderIOEither::right(handle.len()),
    ///     |_handle, _outcome| ReaderIOEither::right(()),
    /// );
    /// assert_eq!(length.run("a.txt".to_string()).run_unsafe(), Either::Right(12));
    /// ```
    pub fn bracket<Resource, X, Use, Release>(
        acquire: ReaderIOEither<R, E, Resource>,
        use_: Use,
        release: Release,
    ) -> Self
    where
        Resource: 'static,
        X: 'static,
        Use: Fn(&Resource) -> Self + Send + Sync + 'static,
        Release: Fn(Resource, &Either<E, B>) -> ReaderIOEither<R, E, X> + Send + Sync + 'static,
    {
        let use_ = Arc::new(use_);
        let release = Arc::new(release);
        Self::new(move |environment: R| {
            let use_ = Arc::clone(&use_);
            let release = Arc::clone(&release);
            let for_use = environment.clone();
            let for_release = environment.clone();
            IOEither::bracket(
                acquire.run(environment),
                move |resource| use_(resource).run(for_use.clone()),
                move |resource, outcome| release(resource, outcome).run(for_release.clone()),
            )
        })
    }

    /// [`ReaderIOEither::bracket`] whose release ignores the outcome of
    /// `use_`.
    pub fn with_resource<Resource, X, Use, Release>(
        on_create: ReaderIOEither<R, E, Resource>,
        on_release: Release,
        use_: Use,
    ) -> Self
    where
        Resource: 'static,
        X: 'static,
        Use: Fn(&Resource) -> Self + Send + Sync + 'static,
        Release: Fn(Resource) -> ReaderIOEither<R, E, X> + Send + Sync + 'static,
    {
        Self::bracket(on_create, use_, move |resource, _| on_release(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Pool = Arc<AtomicUsize>;

    fn checkout() -> ReaderIOEither<Pool, String, usize> {
        ReaderIOEither::asks(|pool: Pool| pool.fetch_add(1, Ordering::SeqCst))
    }

    fn checkin(_connection: usize) -> ReaderIOEither<Pool, String, ()> {
        ReaderIOEither::asks(|pool: Pool| {
            pool.fetch_sub(1, Ordering::SeqCst);
        })
    }

    #[rstest]
    #[case(true, Either::Right(0))]
    #[case(false, Either::Left("query failed".to_string()))]
    fn connection_is_returned(#[case] succeed: bool, #[case] expected: Either<String, usize>) {
        let pool: Pool = Arc::new(AtomicUsize::new(0));
        let query = ReaderIOEither::with_resource(checkout(), checkin, move |connection| {
            if succeed {
                ReaderIOEither::right(*connection)
            } else {
                ReaderIOEither::left("query failed".to_string())
            }
        });
        assert_eq!(query.run(Arc::clone(&pool)).run_unsafe(), expected);
        assert_eq!(pool.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn release_sees_environment_and_outcome() {
        let pool: Pool = Arc::new(AtomicUsize::new(10));
        let bracketed = ReaderIOEither::bracket(
            checkout(),
            |_| ReaderIOEither::<Pool, String, i32>::right(1),
            |_, outcome| {
                let succeeded = outcome.is_right();
                ReaderIOEither::asks(move |pool: Pool| {
                    if succeeded {
                        pool.store(0, Ordering::SeqCst);
                    }
                })
            },
        );
        assert_eq!(bracketed.run(Arc::clone(&pool)).run_unsafe(), Either::Right(1));
        assert_eq!(pool.load(Ordering::SeqCst), 0);
    }
}
