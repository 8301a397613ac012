//! Default error type for the failure channel.
//!
//! Every `Either`-carrying effect is generic over its error type, but a few
//! combinators need a concrete one: converting panics or foreign errors
//! (`try_catch_error`, `try_catch_panic`), serialising values for logging
//! (`log_json`), and the cancellable [`Context`](crate::context::Context)
//! family. They all use [`Error`].
//!
//! `Error` is `Clone + Send + Sync`, so it can be produced again and again by
//! effects that are run more than once.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::Error;
//!
//! let error = Error::from("connection refused");
//! assert_eq!(error.to_string(), "connection refused");
//!
//! let error = Error::Cancelled;
//! assert_eq!(error.to_string(), "context cancelled");
//! ```

use std::fmt;
use std::sync::Arc;

/// The crate's default error value.
#[derive(Debug, Clone)]
pub enum Error {
    /// A plain error message.
    Message(String),
    /// A computation panicked; carries the panic payload when it was a string.
    Panic(String),
    /// The surrounding context was cancelled.
    Cancelled,
    /// The surrounding context ran past its deadline.
    DeadlineExceeded,
    /// A value could not be serialised.
    Serialization(String),
    /// Any other error.
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::Error;
    ///
    /// let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let error = Error::other(io_error);
    /// assert_eq!(error.to_string(), "missing");
    /// ```
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Arc::new(error))
    }

    /// Returns `true` for the two errors a [`Context`](crate::context::Context)
    /// reports once it is done.
    #[must_use]
    pub const fn is_context_error(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// Builds an error from a panic payload.
    #[cfg(feature = "effect")]
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        Self::Panic(panic_message(payload))
    }
}

/// Extracts a readable message from a panic payload.
#[cfg(feature = "effect")]
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(formatter, "{message}"),
            Self::Panic(message) => write!(formatter, "panicked: {message}"),
            Self::Cancelled => write!(formatter, "context cancelled"),
            Self::DeadlineExceeded => write!(formatter, "context deadline exceeded"),
            Self::Serialization(message) => write!(formatter, "serialization failed: {message}"),
            Self::Other(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Message(left), Self::Message(right))
            | (Self::Panic(left), Self::Panic(right))
            | (Self::Serialization(left), Self::Serialization(right)) => left == right,
            (Self::Cancelled, Self::Cancelled) | (Self::DeadlineExceeded, Self::DeadlineExceeded) => {
                true
            }
            (Self::Other(left), Self::Other(right)) => {
                Arc::ptr_eq(left, right) || left.to_string() == right.to_string()
            }
            _ => false,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::other(error)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
