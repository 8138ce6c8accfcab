//! Numeric amount types and mixed-type promotion.
//!
//! A [`Quantity`](crate::Quantity) stores its amount as any [`Scalar`]: the signed and unsigned
//! machine integers up to 64 bits and both floating-point types. Adding or multiplying quantities
//! whose amounts have different types promotes both sides through [`Promote`], following the usual
//! arithmetic conversions:
//!
//! | left    | right   | result  |
//! |---------|---------|---------|
//! | `T`     | `T`     | `T`     |
//! | integer | `f32`   | `f32`   |
//! | integer | `f64`   | `f64`   |
//! | `f32`   | `f64`   | `f64`   |
//! | `i32`   | `i64`   | `i64`   |
//! | `u32`   | `i64`   | `i64`   |
//! | `u32`   | `u64`   | `u64`   |
//!
//! Each row also holds with the operands swapped.

use crate::ratio::Ratio;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A primitive number usable as the amount of a quantity.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Multiplies by an exact ratio.
    ///
    /// Floats compute `self * num / den`. Integers are scaled in `i128` and truncate toward zero;
    /// results that do not fit the type saturate.
    fn rescale(self, factor: Ratio) -> Self;

    /// Absolute value (identity for unsigned types).
    fn magnitude(self) -> Self;

    /// Nearest `f64`.
    fn to_f64(self) -> f64;

    /// Converts from `f64`, truncating and saturating for integers.
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_scalar {
    ($($t:ty => $abs:expr),+ $(,)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn rescale(self, factor: Ratio) -> Self {
                    if factor.is_one() {
                        return self;
                    }
                    let scaled = (self as i128)
                        .checked_mul(factor.numer())
                        .map(|n| n / factor.denom());
                    match scaled.and_then(|n| <$t>::try_from(n).ok()) {
                        Some(n) => n,
                        None => Self::from_f64(self as f64 * factor.to_f64()),
                    }
                }

                #[inline]
                fn magnitude(self) -> Self {
                    let abs: fn(Self) -> Self = $abs;
                    abs(self)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

int_scalar! {
    i8 => |x| x.saturating_abs(),
    i16 => |x| x.saturating_abs(),
    i32 => |x| x.saturating_abs(),
    i64 => |x| x.saturating_abs(),
    u8 => |x| x,
    u16 => |x| x,
    u32 => |x| x,
    u64 => |x| x,
}

macro_rules! float_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn rescale(self, factor: Ratio) -> Self {
                    if factor.is_one() {
                        return self;
                    }
                    self * factor.numer() as $t / factor.denom() as $t
                }

                #[inline]
                fn magnitude(self) -> Self {
                    if self < 0.0 {
                        -self
                    } else {
                        self
                    }
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

float_scalar!(f32, f64);

/// Common type of a binary operation between a `Self` amount and an `Rhs` amount.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The promoted amount type.
    type Promoted: Scalar;

    /// Converts the left operand.
    fn promote_lhs(self) -> Self::Promoted;

    /// Converts the right operand.
    fn promote_rhs(rhs: Rhs) -> Self::Promoted;
}

macro_rules! promote_same {
    ($($t:ty),+) => {
        $(
            impl Promote<$t> for $t {
                type Promoted = $t;

                #[inline]
                fn promote_lhs(self) -> $t {
                    self
                }

                #[inline]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )+
    };
}

promote_same!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! promote_mixed {
    ($($a:ty, $b:ty => $out:ty);+ $(;)?) => {
        $(
            impl Promote<$b> for $a {
                type Promoted = $out;

                #[inline]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$a> for $b {
                type Promoted = $out;

                #[inline]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

promote_mixed! {
    i32, i64 => i64;
    u32, i64 => i64;
    u32, u64 => u64;
    i32, f32 => f32;
    i64, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    i32, f64 => f64;
    i64, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    f32, f64 => f64;
}
