//! Strict control types.
//!
//! - [`Either`]: a value that is an error or a success, with traversal,
//!   do-notation and monoid helpers in the [`either`] module.
//! - [`option`]: traversal and conversion helpers for `Option`.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::control::{either, Either};
//!
//! let checked = either::traverse_array(vec![2, 4, 6], |n| {
//!     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) }
//! });
//! assert_eq!(checked, Either::<i32, _>::Right(vec![1, 2, 3]));
//! ```

pub mod either;
pub mod option;

pub use either::Either;
