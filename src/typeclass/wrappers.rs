//! Newtype wrappers selecting an algebraic operation for numeric types.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: maximum, identity [`Bounded::MIN_VALUE`]
//! - [`Min`]: minimum, identity [`Bounded::MAX_VALUE`]

/// Additive semigroup/monoid.
///
/// ```rust
/// use fpcomb::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Multiplicative semigroup/monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Semigroup keeping the larger value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Semigroup keeping the smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

macro_rules! wrapper_accessors {
    ($($wrapper:ident),+) => {
        $(
            impl<A> $wrapper<A> {
                /// Wraps a value.
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Unwraps the value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

wrapper_accessors!(Sum, Product, Max, Min);

/// Types with a least and a greatest value.
///
/// Needed for [`Max`] and [`Min`] to have an identity element.
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! bounded_numeric {
    ($($numeric:ty),+) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )+
    };
}

bounded_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = char::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for std::time::Duration {
    const MIN_VALUE: Self = Self::ZERO;
    const MAX_VALUE: Self = Self::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_round_trip() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(Max::from('z').into_inner(), 'z');
    }

    #[rstest]
    fn duration_is_bounded() {
        assert_eq!(std::time::Duration::MIN_VALUE, std::time::Duration::ZERO);
    }
}
