//! Derived magnitudes as ordered products of base units.
//!
//! A [`Composition`] is the list of `(base unit, exponent)` factors that make up a unit: `m/s` is
//! `[(m, 1), (s, -1)]`, the newton is `[(kg, 1), (m, 1), (s, -2)]`. From it the composed
//! [`Dimensions`] (sum of each factor's vector scaled by its exponent) and the composed [`Ratio`]
//! (product of each factor's ratio raised to its exponent) follow.
//!
//! Factor order only matters for display. Merging keeps the first occurrence of each base unit,
//! sums exponents of repeated base units and drops factors whose exponent reaches zero.
//!
//! ```rust
//! use magnitude_core::length::Meter;
//! use magnitude_core::time::Second;
//! use magnitude_core::{Composition, Dimensions, Factor, Ratio};
//!
//! const VELOCITY: Composition =
//!     Composition::from_factors(&[Factor::of::<Meter>(1), Factor::of::<Second>(-1)]);
//!
//! assert_eq!(VELOCITY.dimensions(), Dimensions::VELOCITY);
//! assert_eq!(VELOCITY.ratio(), Ratio::ONE);
//! ```

use crate::dimension::{BaseDimension, Dimensions};
use crate::ratio::Ratio;
use crate::unit::BaseUnit;

/// Maximum number of distinct base units in one composition.
pub const MAX_FACTORS: usize = 8;

/// One constituent of a [`Composition`]: a base unit raised to a non-zero exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Factor {
    symbol: &'static str,
    base: BaseDimension,
    ratio: Ratio,
    exponent: i8,
}

const fn same_str(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl Factor {
    const PLACEHOLDER: Self = Self {
        symbol: "",
        base: BaseDimension::Mass,
        ratio: Ratio::ONE,
        exponent: 0,
    };

    /// The base unit `U` raised to `exponent`.
    pub const fn of<U: BaseUnit>(exponent: i8) -> Self {
        Self {
            symbol: U::SYMBOL,
            base: U::BASE,
            ratio: U::RATIO,
            exponent,
        }
    }

    /// Symbol of the base unit (`"kg"`, `"s"`, …).
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Base dimension measured by the base unit.
    #[inline]
    pub const fn base(&self) -> BaseDimension {
        self.base
    }

    /// Exponent applied to the base unit.
    #[inline]
    pub const fn exponent(&self) -> i8 {
        self.exponent
    }

    /// Same base unit with the exponent negated, `None` for an exponent of `i8::MIN`.
    pub const fn inverse(self) -> Option<Self> {
        match self.exponent.checked_neg() {
            Some(exponent) => Some(Self { exponent, ..self }),
            None => None,
        }
    }

    /// Dimension vector contributed by this factor.
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::base(self.base).pow(self.exponent)
    }

    /// Ratio contributed by this factor (`ratio ^ exponent`).
    pub const fn scale(&self) -> Ratio {
        self.ratio.pow(self.exponent)
    }

    /// `true` when both factors refer to the same base unit, regardless of exponent.
    pub const fn same_unit(&self, other: &Self) -> bool {
        self.base.same_as(other.base)
            && self.ratio.numer() == other.ratio.numer()
            && self.ratio.denom() == other.ratio.denom()
            && same_str(self.symbol, other.symbol)
    }
}

/// Ordered product of base units with integer exponents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Composition {
    factors: [Factor; MAX_FACTORS],
    len: usize,
}

impl Composition {
    /// The empty product, i.e. a pure number.
    pub const DIMENSIONLESS: Self = Self {
        factors: [Factor::PLACEHOLDER; MAX_FACTORS],
        len: 0,
    };

    /// Composition of a base unit with itself: `[(U, 1)]`.
    pub const fn base<U: BaseUnit>() -> Self {
        Self::DIMENSIONLESS.with(Factor::of::<U>(1))
    }

    /// Composition of an explicit factor list, as declared by a derived unit.
    ///
    /// # Panics
    ///
    /// If `factors` is empty or one of them has a zero exponent. In a constant this is a compile
    /// error.
    pub const fn from_factors(factors: &[Factor]) -> Self {
        assert!(
            !factors.is_empty(),
            "a derived magnitude needs at least one constituent unit"
        );
        let mut composition = Self::DIMENSIONLESS;
        let mut i = 0;
        while i < factors.len() {
            assert!(
                factors[i].exponent != 0,
                "constituent units of a derived magnitude need a non-zero exponent"
            );
            composition = composition.with(factors[i]);
            i += 1;
        }
        composition
    }

    /// Adds `factor`, merging it with an existing factor of the same base unit.
    ///
    /// # Panics
    ///
    /// If the composition would exceed [`MAX_FACTORS`] distinct base units.
    pub const fn with(self, factor: Factor) -> Self {
        match self.try_with(factor) {
            Some(composition) => composition,
            None => panic!("too many constituent units in a derived magnitude"),
        }
    }

    /// Like [`Composition::with`], `None` when the result has too many constituents or an
    /// exponent overflows.
    pub const fn try_with(mut self, factor: Factor) -> Option<Self> {
        if factor.exponent == 0 {
            return Some(self);
        }
        let mut i = 0;
        while i < self.len {
            if self.factors[i].same_unit(&factor) {
                let exponent = match self.factors[i].exponent.checked_add(factor.exponent) {
                    Some(e) => e,
                    None => return None,
                };
                if exponent == 0 {
                    return Some(self.without(i));
                }
                self.factors[i].exponent = exponent;
                return Some(self);
            }
            i += 1;
        }
        if self.len == MAX_FACTORS {
            return None;
        }
        self.factors[self.len] = factor;
        self.len += 1;
        Some(self)
    }

    const fn without(mut self, index: usize) -> Self {
        let mut i = index;
        while i + 1 < self.len {
            self.factors[i] = self.factors[i + 1];
            i += 1;
        }
        self.len -= 1;
        self.factors[self.len] = Factor::PLACEHOLDER;
        self
    }

    /// Composition of the product `self * other`.
    pub const fn product(self, other: Self) -> Self {
        let mut composition = self;
        let mut i = 0;
        while i < other.len {
            composition = composition.with(other.factors[i]);
            i += 1;
        }
        composition
    }

    /// Composition of the quotient `self / other`.
    pub const fn quotient(self, other: Self) -> Self {
        self.product(other.pow(-1))
    }

    /// Like [`Composition::product`], `None` instead of panicking.
    pub const fn try_product(self, other: Self) -> Option<Self> {
        let mut composition = self;
        let mut i = 0;
        while i < other.len {
            composition = match composition.try_with(other.factors[i]) {
                Some(c) => c,
                None => return None,
            };
            i += 1;
        }
        Some(composition)
    }

    /// Like [`Composition::quotient`], `None` instead of panicking.
    pub const fn try_quotient(self, other: Self) -> Option<Self> {
        match other.try_pow(-1) {
            Some(inverse) => self.try_product(inverse),
            None => None,
        }
    }

    /// Composition with every exponent multiplied by `n`.
    pub const fn pow(self, n: i8) -> Self {
        match self.try_pow(n) {
            Some(composition) => composition,
            None => panic!("exponent overflow in a derived magnitude"),
        }
    }

    /// Like [`Composition::pow`], `None` when an exponent overflows.
    pub const fn try_pow(self, n: i8) -> Option<Self> {
        if n == 0 {
            return Some(Self::DIMENSIONLESS);
        }
        let mut composition = self;
        let mut i = 0;
        while i < composition.len {
            let exponent = match composition.factors[i].exponent.checked_mul(n) {
                Some(e) => e,
                None => return None,
            };
            composition.factors[i].exponent = exponent;
            i += 1;
        }
        Some(composition)
    }

    /// Number of distinct base units.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` for a pure number.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Composed dimension vector.
    pub const fn dimensions(&self) -> Dimensions {
        let mut dimensions = Dimensions::DIMENSIONLESS;
        let mut i = 0;
        while i < self.len {
            dimensions = dimensions.mul(self.factors[i].dimensions());
            i += 1;
        }
        dimensions
    }

    /// Like [`Composition::dimensions`], `None` when a summed exponent leaves the `i8` range.
    pub const fn checked_dimensions(&self) -> Option<Dimensions> {
        let mut dimensions = Dimensions::DIMENSIONLESS;
        let mut i = 0;
        while i < self.len {
            let factor = &self.factors[i];
            let factor = match Dimensions::base(factor.base).checked_pow(factor.exponent) {
                Some(d) => d,
                None => return None,
            };
            dimensions = match dimensions.checked_mul(factor) {
                Some(d) => d,
                None => return None,
            };
            i += 1;
        }
        Some(dimensions)
    }

    /// Composed ratio relative to the reference units of every involved dimension.
    pub const fn ratio(&self) -> Ratio {
        let mut ratio = Ratio::ONE;
        let mut i = 0;
        while i < self.len {
            ratio = ratio.mul(self.factors[i].scale());
            i += 1;
        }
        ratio
    }

    /// Like [`Composition::ratio`], `None` when a term overflows.
    pub const fn checked_ratio(&self) -> Option<Ratio> {
        let mut ratio = Ratio::ONE;
        let mut i = 0;
        while i < self.len {
            let scale = match self.factors[i].ratio.checked_pow(self.factors[i].exponent) {
                Some(r) => r,
                None => return None,
            };
            ratio = match ratio.checked_mul(scale) {
                Some(r) => r,
                None => return None,
            };
            i += 1;
        }
        Some(ratio)
    }

    /// The factors, in display order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors[..self.len]
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
