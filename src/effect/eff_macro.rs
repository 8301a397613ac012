//! Statement-style do-notation over any type with a `flat_map` method.
//!
//! Each `pattern <= effect;` line becomes a `flat_map` whose continuation is
//! the rest of the block, so failures short-circuit the same way `chain`
//! does. `let` lines bind plain values. The last expression must already be
//! an effect.
//!
//! ```rust
//! use fpcomb::control::Either;
//! use fpcomb::effect::IOEither;
//! use fpcomb::eff;
//!
//! let total = eff! {
//!     price <= IOEither::<String, u32>::right(40);
//!     (quantity, discount) <= IOEither::right((3, 20));
//!     let gross = price * quantity;
//!     IOEither::right(gross - discount)
//! };
//! assert_eq!(total.run_unsafe(), Either::Right(100));
//! ```
//!
//! `<-` is not a single token, so the bind arrow is written `<=`.

/// Chains effects in statement style; see the [module docs](crate::effect).
#[macro_export]
macro_rules! eff {
    ($last:expr) => {
        $last
    };

    (_ <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |_| $crate::eff!($($rest)+))
    };

    ($name:ident <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |$name| $crate::eff!($($rest)+))
    };

    (($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |($($pattern)*)| $crate::eff!($($rest)+))
    };

    (let $name:ident = $value:expr ; $($rest:tt)+) => {{
        let $name = $value;
        $crate::eff!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $value;
        $crate::eff!($($rest)+)
    }};
}
