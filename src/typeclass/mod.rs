//! Algebraic type classes.
//!
//! - [`Semigroup`]: associative binary operation (`combine`)
//! - [`Monoid`]: semigroup with an identity element (`empty`)
//! - [`MonoidInstance`]: a monoid carried as a value, for identities only
//!   known at runtime
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: wrappers choosing an operation
//!
//! Functor, applicative and monad operations are not traits here: every
//! effect type exposes `map`, `ap` and `chain` as inherent methods, because
//! the effect types wrap `Arc<dyn Fn>` closures with `Send + Sync + 'static`
//! bounds that a single higher-kinded trait cannot express without
//! constraining every other implementor.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

mod instance;
mod monoid;
mod semigroup;
mod wrappers;

pub use instance::MonoidInstance;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
