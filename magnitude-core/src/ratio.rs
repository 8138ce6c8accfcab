//! Exact rational scale factors.
//!
//! A unit's ratio relates it to the reference unit of its dimension (`1 kg = 1000 g`,
//! `1 km/h = 5/18 m/s`). Ratios are kept as reduced fractions so that composing and inverting them
//! never drifts; only the final rescale of an amount touches floating point.

use core::fmt::{Display, Formatter, Result};

/// Reduced fraction `num / den` with `den > 0` and `num != 0`.
///
/// ```rust
/// use magnitude_core::Ratio;
///
/// let kmh = Ratio::integer(1000).div(Ratio::integer(3600));
/// assert_eq!(kmh, Ratio::new(5, 18));
/// assert_eq!(kmh.recip().mul(kmh), Ratio::ONE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn checked(value: Option<Ratio>) -> Ratio {
    match value {
        Some(v) => v,
        None => panic!("ratio overflow"),
    }
}

impl Ratio {
    /// The identity ratio.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Builds and reduces `num / den`.
    ///
    /// # Panics
    ///
    /// If either term is zero. Inside a constant this is a compile error.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        assert!(num != 0, "ratio must be non-zero");
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// Whole-number ratio `n / 1`.
    pub const fn integer(n: i128) -> Self {
        Self::new(n, 1)
    }

    /// Numerator of the reduced fraction.
    #[inline]
    pub const fn numer(&self) -> i128 {
        self.num
    }

    /// Denominator of the reduced fraction (always positive).
    #[inline]
    pub const fn denom(&self) -> i128 {
        self.den
    }

    /// Product of two ratios.
    ///
    /// # Panics
    ///
    /// If a reduced term overflows `i128`.
    pub const fn mul(self, other: Self) -> Self {
        checked(self.checked_mul(other))
    }

    /// Product of two ratios, `None` on overflow.
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        // Cross-reduce first to keep the intermediate terms small.
        let g1 = gcd(self.num, other.den);
        let g2 = gcd(other.num, self.den);
        let num = (self.num / g1).checked_mul(other.num / g2);
        let den = (self.den / g2).checked_mul(other.den / g1);
        match (num, den) {
            (Some(num), Some(den)) => Some(Self::new(num, den)),
            _ => None,
        }
    }

    /// Quotient of two ratios.
    pub const fn div(self, other: Self) -> Self {
        self.mul(other.recip())
    }

    /// Quotient of two ratios, `None` on overflow.
    pub const fn checked_div(self, other: Self) -> Option<Self> {
        self.checked_mul(other.recip())
    }

    /// `den / num`.
    pub const fn recip(self) -> Self {
        Self::new(self.den, self.num)
    }

    /// Integer power; negative exponents invert.
    pub const fn pow(self, exponent: i8) -> Self {
        checked(self.checked_pow(exponent))
    }

    /// Integer power, `None` on overflow.
    pub const fn checked_pow(self, exponent: i8) -> Option<Self> {
        let base = if exponent < 0 { self.recip() } else { self };
        let mut result = Self::ONE;
        let mut n = exponent.unsigned_abs();
        while n > 0 {
            result = match result.checked_mul(base) {
                Some(r) => r,
                None => return None,
            };
            n -= 1;
        }
        Some(result)
    }

    /// `true` for `1 / 1`.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Nearest `f64` to the fraction.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
