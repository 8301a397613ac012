//! # fpcomb
//!
//! Functor, applicative and monad combinators over a family of effect
//! types, from `Either` up to `StateReaderIOEither`.
//!
//! ## Overview
//!
//! - **Type Classes**: `Semigroup`, `Monoid`, value-level monoid instances
//! - **Control**: `Either` and `Option` helpers (traversals, tuple
//!   sequencing, do-notation, monoids)
//! - **Effects**: `IO`, `IOEither`, `Reader`, `ReaderEither`, `ReaderIO`,
//!   `ReaderIOEither`, `State`, `StateReaderIOEither`, plus retry policies,
//!   bracketing, locking, memoization and the `eff!` macro
//! - **Optics**: `Lens` and `Prism`, usable from do-notation
//! - **Context**: `ReaderIOEither` specialised to a cancellable context
//!
//! Every effect is a description that runs synchronously, on the calling
//! thread, each time it is run.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid`, wrappers
//! - `control`: `Either`, option helpers
//! - `effect`: effect types, retry, `eff!`
//! - `optics`: `Lens`, `Prism`
//! - `context`: cancellable `Context` specialisation
//! - `serde`: `Serialize`/`Deserialize` for `Either`, `IOEither::log_json`
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use fpcomb::prelude::*;
//!
//! #[derive(Clone)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! let describe = ReaderIOEither::<Config, String, Config>::ask()
//!     .map(|config| config.retries)
//!     .chain_either_k(|retries| {
//!         if retries > 0 { Either::Right(format!("{retries} retries")) } else { Either::Left("no retries".to_string()) }
//!     });
//!
//! assert_eq!(describe.provide(Config { retries: 3 }).run_unsafe(), Either::Right("3 retries".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fpcomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::Either;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::{
        IO, IOEither, Reader, ReaderEither, ReaderIO, ReaderIOEither, State, StateReaderIOEither, Unlock,
    };

    #[cfg(feature = "effect")]
    pub use crate::retry::{RetryPolicy, RetryStatus};

    #[cfg(feature = "context")]
    pub use crate::context::{CancelHandle, Context};
}

pub mod error;

pub use error::Error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "effect")]
pub mod retry;

#[cfg(feature = "context")]
pub mod context;

#[cfg(feature = "effect")]
mod assertions {
    use static_assertions::assert_impl_all;

    use crate::effect::{
        IO, IOEither, Reader, ReaderEither, ReaderIO, ReaderIOEither, State, StateReaderIOEither,
    };
    use crate::error::Error;

    assert_impl_all!(Error: Clone, Send, Sync);
    assert_impl_all!(IO<i32>: Clone, Send, Sync);
    assert_impl_all!(IOEither<Error, i32>: Clone, Send, Sync);
    assert_impl_all!(Reader<String, i32>: Clone, Send, Sync);
    assert_impl_all!(ReaderEither<String, Error, i32>: Clone, Send, Sync);
    assert_impl_all!(ReaderIO<String, i32>: Clone, Send, Sync);
    assert_impl_all!(ReaderIOEither<String, Error, i32>: Clone, Send, Sync);
    assert_impl_all!(State<u32, i32>: Clone, Send, Sync);
    assert_impl_all!(StateReaderIOEither<u32, String, Error, i32>: Clone, Send, Sync);

    #[cfg(feature = "context")]
    assert_impl_all!(crate::context::Context: Clone, Send, Sync);
}
