//! Effect types.
//!
//! Every effect here is a description of a computation, stored as an
//! `Arc<dyn Fn>`. Building one runs nothing; running it runs everything
//! again. All of them are `Clone + Send + Sync`.
//!
//! | Type | Shape |
//! |------|-------|
//! | [`IO<A>`] | `() -> A` |
//! | [`IOEither<E, A>`] | `() -> Either<E, A>` |
//! | [`Reader<R, A>`] | `R -> A` |
//! | [`ReaderEither<R, E, A>`] | `R -> Either<E, A>` |
//! | [`ReaderIO<R, A>`] | `R -> IO<A>` |
//! | [`ReaderIOEither<R, E, A>`] | `R -> IOEither<E, A>` |
//! | [`State<S, A>`] | `S -> (A, S)` |
//! | [`StateReaderIOEither<S, R, E, A>`] | `S -> ReaderIOEither<R, E, (A, S)>` |
//!
//! Each layer is built from the one below it and converts up with `From`.
//! Traversals, tuple sequencing and monoid constructors are free functions
//! in the module of each type, e.g. [`io_either::traverse_array_par`].
//!
//! Statement-style composition over any of them is available through
//! [`eff!`](crate::eff):
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::eff;
//! use fpcomb::effect::ReaderIOEither;
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max_items: usize,
//! }
//!
//! let page = eff! {
//!     limits <= ReaderIOEither::<Limits, String, Limits>::ask();
//!     items <= ReaderIOEither::of(vec![1, 2, 3, 4, 5]);
//!     ReaderIOEither::of(items.into_iter().take(limits.max_items).collect::<Vec<_>>())
//! };
//! assert_eq!(page.provide(Limits { max_items: 2 }).run_unsafe(), Either::Right(vec![1, 2]));
//! ```

mod eff_macro;
mod lock;

pub mod io;
pub mod io_either;
pub mod reader;
pub mod reader_either;
pub mod reader_io;
pub mod reader_io_either;
pub mod state;
pub mod state_reader_io_either;

pub use io::IO;
pub use io_either::IOEither;
pub use lock::Unlock;
pub use reader::Reader;
pub use reader_either::ReaderEither;
pub use reader_io::ReaderIO;
pub use reader_io_either::ReaderIOEither;
pub use state::State;
pub use state_reader_io_either::StateReaderIOEither;
