//! Lenses and prisms.
//!
//! Optics are first-class accessors for immutable data. In this crate they
//! mainly drive the lens variants of do-notation (`bind_l`, `let_l`,
//! `let_to_l`, `ap_s_l`) and `from_prism` constructors, but they are usable
//! on their own.
//!
//! - [`Lens`]: focus on a field that is always present.
//! - [`Prism`]: focus on one variant of a sum type.
//!
//! # Examples
//!
//! ```rust
//! use fpcomb::lens;
//! use fpcomb::optics::Lens;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Limits { max_connections: usize }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Config { name: String, limits: Limits }
//!
//! let max_connections = lens!(Config, limits).compose(lens!(Limits, max_connections));
//!
//! let config = Config { name: "api".to_string(), limits: Limits { max_connections: 16 } };
//! let doubled = max_connections.modify(config, |n| n * 2);
//!
//! assert_eq!(doubled.limits.max_connections, 32);
//! assert_eq!(doubled.name, "api");
//! ```

mod lens;
mod prism;

pub use lens::{ComposedLens, FunctionLens, Lens};
pub use prism::{
    left_prism, right_prism, some_prism, ComposedPrism, FunctionPrism, LeftPrism, Prism,
    RightPrism, SomePrism,
};
