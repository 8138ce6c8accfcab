//! Dimension vectors.
//!
//! Every physical quantity has a *kind* described by the exponents of the seven base dimensions
//! (mass, length, time, electric current, thermodynamic temperature, amount of substance and
//! luminous intensity). A [`Dimensions`] value stores those exponents; two quantities can be added
//! only when their vectors are equal, and multiplying/dividing quantities adds/subtracts them.
//!
//! All operations are `const fn`, so the vectors of the predefined units are computed while compiling.
//!
//! ```rust
//! use magnitude_core::Dimensions;
//!
//! let velocity = Dimensions::LENGTH.div(Dimensions::TIME);
//! assert!(velocity.same_as(&Dimensions::VELOCITY));
//! assert_eq!(velocity.to_string(), "L T^-1");
//! ```

use core::fmt::{Display, Formatter, Result};

/// Number of base dimensions tracked by a [`Dimensions`] vector.
pub const BASE_DIMENSIONS: usize = 7;

/// One of the seven base dimensions.
///
/// The discriminant is the slot of the dimension inside a [`Dimensions`] vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BaseDimension {
    /// Mass `M` (reference unit: gram).
    Mass = 0,
    /// Length `L` (reference unit: metre).
    Length = 1,
    /// Time `T` (reference unit: second).
    Time = 2,
    /// Electric current `I` (reference unit: ampere).
    Current = 3,
    /// Thermodynamic temperature `Θ` (reference unit: kelvin).
    Temperature = 4,
    /// Amount of substance `N` (reference unit: mole).
    Amount = 5,
    /// Luminous intensity `J` (reference unit: candela).
    LuminousIntensity = 6,
}

impl BaseDimension {
    /// Every base dimension, in slot order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Slot of this dimension inside a [`Dimensions`] vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional one-letter symbol (`M`, `L`, `T`, `I`, `Θ`, `N`, `J`).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Mass => "M",
            BaseDimension::Length => "L",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    /// `const` equality, usable where `PartialEq` is not.
    #[inline]
    pub const fn same_as(self, other: BaseDimension) -> bool {
        self as u8 == other as u8
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

/// Exponents of the seven base dimensions.
///
/// ```rust
/// use magnitude_core::{BaseDimension, Dimensions};
///
/// let force = Dimensions::new(1, 1, -2, 0, 0, 0, 0);
/// assert_eq!(force.get(BaseDimension::Time), -2);
/// assert!(force.same_as(&Dimensions::FORCE));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dimensions([i8; BASE_DIMENSIONS]);

impl Dimensions {
    // ─────────────────────────────────────────────────────────────────────────────
    // Base dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Pure number.
    pub const DIMENSIONLESS: Self = Self([0; BASE_DIMENSIONS]);
    /// `M`
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    /// `L`
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    /// `T`
    pub const TIME: Self = Self::base(BaseDimension::Time);
    /// `I`
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    /// `Θ`
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    /// `N`
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    /// `J`
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseDimension::LuminousIntensity);

    // ─────────────────────────────────────────────────────────────────────────────
    // Common derived dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Area `L²`.
    pub const AREA: Self = Self::new(0, 2, 0, 0, 0, 0, 0);
    /// Velocity `L T⁻¹`.
    pub const VELOCITY: Self = Self::new(0, 1, -1, 0, 0, 0, 0);
    /// Acceleration `L T⁻²`.
    pub const ACCELERATION: Self = Self::new(0, 1, -2, 0, 0, 0, 0);
    /// Frequency `T⁻¹` (hertz).
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);
    /// Force `M L T⁻²` (newton).
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);
    /// Energy `M L² T⁻²` (joule).
    pub const ENERGY: Self = Self::new(1, 2, -2, 0, 0, 0, 0);
    /// Power `M L² T⁻³` (watt).
    pub const POWER: Self = Self::new(1, 2, -3, 0, 0, 0, 0);
    /// Electric charge `T I` (coulomb).
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0);
    /// Voltage `M L² T⁻³ I⁻¹` (volt).
    pub const VOLTAGE: Self = Self::new(1, 2, -3, -1, 0, 0, 0);

    /// Creates a vector from its exponents, in [`BaseDimension`] slot order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        mass: i8,
        length: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self([
            mass,
            length,
            time,
            current,
            temperature,
            amount,
            luminous_intensity,
        ])
    }

    /// Vector with a single exponent of one on `dimension`.
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[dimension.index()] = 1;
        Self(exponents)
    }

    /// Exponent of `dimension`.
    #[inline]
    pub const fn get(&self, dimension: BaseDimension) -> i8 {
        self.0[dimension.index()]
    }

    /// All exponents in slot order.
    #[inline]
    pub const fn exponents(&self) -> [i8; BASE_DIMENSIONS] {
        self.0
    }

    /// Product of two kinds: exponents are added.
    pub const fn mul(self, other: Self) -> Self {
        let mut exponents = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            exponents[i] += other.0[i];
            i += 1;
        }
        Self(exponents)
    }

    /// Like [`Dimensions::mul`], `None` when an exponent leaves the `i8` range.
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            exponents[i] = match exponents[i].checked_add(other.0[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Self(exponents))
    }

    /// Quotient of two kinds: exponents are subtracted.
    pub const fn div(self, other: Self) -> Self {
        self.mul(other.recip())
    }

    /// Every exponent negated.
    pub const fn recip(self) -> Self {
        self.pow(-1)
    }

    /// Every exponent scaled by `n`.
    pub const fn pow(self, n: i8) -> Self {
        let mut exponents = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            exponents[i] *= n;
            i += 1;
        }
        Self(exponents)
    }

    /// Like [`Dimensions::pow`], `None` when an exponent leaves the `i8` range.
    pub const fn checked_pow(self, n: i8) -> Option<Self> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            exponents[i] = match exponents[i].checked_mul(n) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Self(exponents))
    }

    /// `const` element-wise equality.
    pub const fn same_as(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.same_as(&Self::DIMENSIONLESS)
    }
}

impl Display for Dimensions {
    /// Writes the non-zero exponents as `M L T^-2`, or `1` for a pure number.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for dimension in BaseDimension::ALL {
            let exponent = self.get(dimension);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(dimension.symbol())?;
            if exponent != 1 {
                write!(f, "^{}", exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_vectors_have_a_single_unit_slot() {
        for dimension in BaseDimension::ALL {
            let v = Dimensions::base(dimension);
            for other in BaseDimension::ALL {
                let expected = if other == dimension { 1 } else { 0 };
                assert_eq!(v.get(other), expected);
            }
        }
    }

    #[test]
    fn mul_adds_exponents() {
        let force = Dimensions::MASS.mul(Dimensions::ACCELERATION);
        assert_eq!(force, Dimensions::FORCE);
    }

    #[test]
    fn div_subtracts_exponents() {
        let power = Dimensions::ENERGY.div(Dimensions::TIME);
        assert_eq!(power, Dimensions::POWER);
        assert_eq!(Dimensions::POWER.div(Dimensions::CURRENT), Dimensions::VOLTAGE);
    }

    #[test]
    fn recip_and_pow() {
        assert_eq!(Dimensions::TIME.recip(), Dimensions::FREQUENCY);
        assert_eq!(Dimensions::LENGTH.pow(2), Dimensions::AREA);
        assert!(Dimensions::MASS.pow(0).is_dimensionless());
    }

    #[test]
    fn checked_arithmetic_stays_in_range() {
        assert_eq!(
            Dimensions::MASS.checked_mul(Dimensions::LENGTH),
            Some(Dimensions::MASS.mul(Dimensions::LENGTH))
        );
        assert_eq!(Dimensions::TIME.checked_pow(-2), Some(Dimensions::TIME.pow(-2)));
        assert_eq!(Dimensions::MASS.pow(127).checked_mul(Dimensions::MASS), None);
        assert_eq!(Dimensions::LENGTH.pow(100).checked_pow(2), None);
        assert_eq!(Dimensions::LENGTH.pow(-128).checked_pow(-1), None);
    }

    #[test]
    fn same_as_matches_partial_eq() {
        assert!(Dimensions::CHARGE.same_as(&Dimensions::TIME.mul(Dimensions::CURRENT)));
        assert!(!Dimensions::MASS.same_as(&Dimensions::LENGTH));
        assert_eq!(
            Dimensions::MASS.same_as(&Dimensions::LENGTH),
            Dimensions::MASS == Dimensions::LENGTH
        );
    }

    #[test]
    fn dividing_a_kind_by_itself_is_dimensionless() {
        assert!(Dimensions::VOLTAGE.div(Dimensions::VOLTAGE).is_dimensionless());
    }

    #[test]
    fn const_evaluation() {
        const ACCEL: Dimensions = Dimensions::VELOCITY.div(Dimensions::TIME);
        assert_eq!(ACCEL, Dimensions::ACCELERATION);
    }

    #[test]
    fn display() {
        assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimensions::MASS.to_string(), "M");
        assert_eq!(Dimensions::FORCE.to_string(), "M L T^-2");
        assert_eq!(Dimensions::VOLTAGE.to_string(), "M L^2 T^-3 I^-1");
        assert_eq!(Dimensions::TEMPERATURE.to_string(), "Θ");
    }

    #[test]
    fn base_dimension_symbols() {
        let symbols: Vec<&str> = BaseDimension::ALL.iter().map(|d| d.symbol()).collect();
        assert_eq!(symbols, ["M", "L", "T", "I", "Θ", "N", "J"]);
        assert!(BaseDimension::Time.same_as(BaseDimension::Time));
        assert!(!BaseDimension::Time.same_as(BaseDimension::Mass));
    }
}
