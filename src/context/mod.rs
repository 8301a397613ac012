//! Cancellation scopes for effects that read a [`Context`].
//!
//! A [`Context`] is an ordinary environment value: cloneable, thread-safe,
//! and checked by the computations that receive it. Nothing is interrupted
//! preemptively. Effects built with [`reader_io_either::with_context`] or
//! [`reader_io_either::sleep`] look at the context and stop with
//! [`Error::Cancelled`] or [`Error::DeadlineExceeded`].
//!
//! Contexts form a tree. Cancelling a parent cancels every context derived
//! from it, and a child never outlives its parent's deadline.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::context::Context;
//! use fpcomb::Error;
//!
//! let root = Context::background();
//! let (request, cancel) = root.with_cancel();
//! let query = request.with_cancel().0;
//!
//! assert!(query.err().is_none());
//! cancel.cancel();
//! assert!(query.is_cancelled());
//! assert_eq!(query.err(), Some(Error::Cancelled));
//! assert!(root.err().is_none());
//! ```

pub mod reader_io_either;

pub use reader_io_either::ReaderIOEither;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::Error;

struct Scope {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<Arc<Scope>>,
}

impl Scope {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
            || self.parent.as_ref().is_some_and(|parent| parent.is_cancelled())
    }
}

/// A cancellation scope with an optional deadline.
#[derive(Clone)]
pub struct Context {
    scope: Arc<Scope>,
}

/// Cancels the [`Context`] returned next to it by [`Context::with_cancel`].
#[derive(Clone)]
pub struct CancelHandle {
    scope: Arc<Scope>,
}

impl Context {
    /// The root context: never cancelled, no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self {
            scope: Arc::new(Scope {
                cancelled: AtomicBool::new(false),
                deadline: None,
                parent: None,
            }),
        }
    }

    fn child(&self, deadline: Option<Instant>) -> Self {
        let deadline = match (self.scope.deadline, deadline) {
            (Some(inherited), Some(own)) => Some(inherited.min(own)),
            (inherited, own) => inherited.or(own),
        };
        Self {
            scope: Arc::new(Scope {
                cancelled: AtomicBool::new(false),
                deadline,
                parent: Some(Arc::clone(&self.scope)),
            }),
        }
    }

    /// Derives a child context together with the handle that cancels it.
    #[must_use]
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let child = self.child(None);
        let handle = CancelHandle {
            scope: Arc::clone(&child.scope),
        };
        (child, handle)
    }

    /// Derives a child context that expires at `deadline`, or at the
    /// parent's deadline if that comes first.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        self.child(Some(deadline))
    }

    /// Derives a child context that expires `timeout` from now.
    ///
    /// A timeout too large to represent as an instant sets no deadline of
    /// its own; the parent's deadline still applies.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.child(Instant::now().checked_add(timeout))
    }

    /// The instant this context expires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.scope.deadline
    }

    /// Time left before the deadline; `None` without a deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.scope
            .deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns `true` once this context or one of its ancestors was
    /// cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Why this context is done, or `None` while it is still live.
    ///
    /// Cancellation is reported in preference to an expired deadline.
    #[must_use]
    pub fn err(&self) -> Option<Error> {
        if self.is_cancelled() {
            Some(Error::Cancelled)
        } else if self.scope.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            Some(Error::DeadlineExceeded)
        } else {
            None
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("deadline", &self.scope.deadline)
            .finish()
    }
}

impl CancelHandle {
    /// Cancels the context and everything derived from it. Calling it again
    /// has no effect.
    pub fn cancel(&self) {
        if !self.scope.cancelled.swap(true, Ordering::AcqRel) {
            tracing::debug!("context cancelled");
        }
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("CancelHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn background_is_live() {
        let context = Context::background();
        assert!(!context.is_cancelled());
        assert!(context.err().is_none());
        assert!(context.deadline().is_none());
        assert!(context.remaining().is_none());
    }

    #[rstest]
    fn cancellation_reaches_grandchildren_only() {
        let (parent, cancel) = Context::background().with_cancel();
        let (sibling, _) = Context::background().with_cancel();
        let grandchild = parent.with_timeout(Duration::from_secs(60)).with_cancel().0;
        cancel.cancel();
        cancel.cancel();
        assert_eq!(grandchild.err(), Some(Error::Cancelled));
        assert!(sibling.err().is_none());
    }

    #[rstest]
    fn child_cancel_leaves_parent_live() {
        let parent = Context::background();
        let (child, cancel) = parent.with_cancel();
        cancel.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[rstest]
    fn expired_deadline() {
        let context = Context::background().with_deadline(Instant::now() - Duration::from_millis(1));
        assert_eq!(context.err(), Some(Error::DeadlineExceeded));
        assert_eq!(context.remaining(), Some(Duration::ZERO));
    }

    #[rstest]
    fn child_keeps_earlier_parent_deadline() {
        let parent = Context::background().with_timeout(Duration::from_millis(10));
        let child = parent.with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());
    }

    #[rstest]
    fn unrepresentable_timeout_sets_no_deadline() {
        let context = Context::background().with_timeout(Duration::MAX);
        assert_eq!(context.deadline(), None);
        assert_eq!(context.err(), None);

        let parent = Context::background().with_timeout(Duration::from_secs(60));
        assert_eq!(parent.with_timeout(Duration::MAX).deadline(), parent.deadline());
    }

    #[rstest]
    fn cancellation_wins_over_deadline() {
        let (context, cancel) = Context::background().with_timeout(Duration::ZERO).with_cancel();
        cancel.cancel();
        assert_eq!(context.err(), Some(Error::Cancelled));
    }
}
