//! Resource safety for `IOEither`.

use std::fmt;

use super::IOEither;
use crate::control::Either;

impl<E: 'static, B: 'static> IOEither<E, B> {
    /// Acquires a resource, uses it, and releases it exactly once.
    ///
    /// - If `acquire` fails, its error is returned and neither `use_` nor
    ///   `release` runs.
    /// - Otherwise `release` runs after `use_`, whatever `use_` returned,
    ///   and sees that outcome.
    /// - A failure of `use_` takes precedence over a failure of `release`.
    /// - A failure of `release` replaces a successful `use_` result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use fpcomb::control::Either;
    /// use fpcomb::effect::IOEither;
    ///
    /// let released = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&released);
    ///
    /// let read = IOEither::bracket(
    ///     IOEither::<String, _>::right("handle-1"),
    ///     |handle| IOEither::right(handle.len()),
    ///     move |handle, _outcome| {
    ///         log.lock().unwrap().push(handle);
    ///         IOEither::right(())
    ///     },
    /// );
    ///
    /// assert_eq!(read.run_unsafe(), Either::Right(8));
    /// assert_eq!(*released.lock().unwrap(), vec!["handle-1"]);
    /// ```
    pub fn bracket<R, X, Use, Release>(acquire: IOEither<E, R>, use_: Use, release: Release) -> Self
    where
        R: 'static,
        X: 'static,
        E: fmt::Debug,
        Use: Fn(&R) -> Self + Send + Sync + 'static,
        Release: Fn(R, &Either<E, B>) -> IOEither<E, X> + Send + Sync + 'static,
    {
        Self::new(move || {
            let resource = match acquire.run_unsafe() {
                Either::Left(error) => return Either::Left(error),
                Either::Right(resource) => resource,
            };
            let outcome = use_(&resource).run_unsafe();
            let released = release(resource, &outcome).run_unsafe();
            match (outcome, released) {
                (Either::Left(error), Either::Left(release_error)) => {
                    tracing::warn!(error = ?release_error, "resource release failed after use failure");
                    Either::Left(error)
                }
                (Either::Left(error), Either::Right(_)) => Either::Left(error),
                (Either::Right(_), Either::Left(release_error)) => {
                    tracing::warn!(error = ?release_error, "resource release failed");
                    Either::Left(release_error)
                }
                (Either::Right(value), Either::Right(_)) => Either::Right(value),
            }
        })
    }

    /// [`IOEither::bracket`] whose release ignores the outcome of `use_`.
    pub fn with_resource<R, X, Use, Release>(
        on_create: IOEither<E, R>,
        on_release: Release,
        use_: Use,
    ) -> Self
    where
        R: 'static,
        X: 'static,
        E: fmt::Debug,
        Use: Fn(&R) -> Self + Send + Sync + 'static,
        Release: Fn(R) -> IOEither<E, X> + Send + Sync + 'static,
    {
        Self::bracket(on_create, use_, move |resource, _| on_release(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    type Outcome = Either<&'static str, i32>;

    fn release_counter() -> (
        Arc<AtomicUsize>,
        impl Fn(i32, &Outcome) -> IOEither<&'static str, ()> + Send + Sync + 'static,
    ) {
        let releases = Arc::new(AtomicUsize::new(0));
        let shared = Arc::clone(&releases);
        let release = move |_: i32, _: &Outcome| {
            shared.fetch_add(1, Ordering::SeqCst);
            IOEither::right(())
        };
        (releases, release)
    }

    #[rstest]
    #[case(IOEither::right(10), Either::Right(11))]
    #[case(IOEither::left("use failed"), Either::Left("use failed"))]
    fn release_runs_exactly_once(
        #[case] use_result: IOEither<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let (releases, release) = release_counter();
        let bracketed = IOEither::bracket(
            IOEither::right(1),
            move |resource| {
                let offset = *resource;
                use_result.clone().map(move |n| n + offset)
            },
            release,
        );
        assert_eq!(bracketed.run_unsafe(), expected);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn failed_acquire_skips_use_and_release() {
        let (releases, release) = release_counter();
        let used = Arc::new(AtomicUsize::new(0));
        let used_shared = Arc::clone(&used);
        let bracketed = IOEither::bracket(
            IOEither::<&str, i32>::left("no resource"),
            move |_| {
                used_shared.fetch_add(1, Ordering::SeqCst);
                IOEither::right(0)
            },
            release,
        );
        assert_eq!(bracketed.run_unsafe(), Either::Left("no resource"));
        assert_eq!(used.load(Ordering::SeqCst), 0);
        assert_eq!(releases.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[traced_test]
    fn release_failure_replaces_success() {
        let bracketed = IOEither::bracket(
            IOEither::<&str, i32>::right(1),
            |_| IOEither::right(2),
            |_, _| IOEither::<&str, ()>::left("close failed"),
        );
        assert_eq!(bracketed.run_unsafe(), Either::Left("close failed"));
        assert!(logs_contain("resource release failed"));
    }

    #[rstest]
    fn use_failure_wins_over_release_failure() {
        let bracketed = IOEither::bracket(
            IOEither::<&str, i32>::right(1),
            |_| IOEither::<&str, i32>::left("use failed"),
            |_, _| IOEither::<&str, ()>::left("close failed"),
        );
        assert_eq!(bracketed.run_unsafe(), Either::Left("use failed"));
    }

    #[rstest]
    fn release_sees_use_outcome() {
        let seen = Arc::new(parking_lot::Mutex::new(None));
        let shared = Arc::clone(&seen);
        let bracketed = IOEither::bracket(
            IOEither::<&str, i32>::right(1),
            |_| IOEither::right(5),
            move |_, outcome| {
                *shared.lock() = Some(*outcome);
                IOEither::right(())
            },
        );
        let _ = bracketed.run_unsafe();
        assert_eq!(*seen.lock(), Some(Either::Right(5)));
    }

    #[rstest]
    fn with_resource_releases() {
        let releases = Arc::new(AtomicUsize::new(0));
        let shared = Arc::clone(&releases);
        let io = IOEither::with_resource(
            IOEither::<&str, &str>::right("conn"),
            move |_| {
                shared.fetch_add(1, Ordering::SeqCst);
                IOEither::right(())
            },
            |conn| IOEither::right(conn.to_uppercase()),
        );
        assert_eq!(io.run_unsafe(), Either::Right("CONN".to_string()));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
