//! Runtime-tagged units and quantities.
//!
//! [`Quantity<U, T>`](crate::Quantity) checks dimensions at compile time. When the unit is only known
//! at runtime (parsed from text, read from a configuration file, picked by a user), use
//! [`DynUnit`] and [`DynQuantity`] instead: they carry the same composition, ratio and symbol as
//! values, and every operation that can mix dimensions returns a [`QuantityResult`].
//!
//! ```rust
//! use magnitude_core::{DynQuantity, QuantityError};
//!
//! let mass: DynQuantity = "3000 kg".parse().unwrap();
//! let more: DynQuantity = "72 hg".parse().unwrap();
//! assert_eq!(mass.try_add(&more).unwrap().to_string(), "3007.2 kg");
//!
//! let length: DynQuantity = "2 m".parse().unwrap();
//! assert!(matches!(
//!     mass.try_add(&length),
//!     Err(QuantityError::DimensionMismatch { .. })
//! ));
//! ```

use crate::composition::Composition;
use crate::dimension::Dimensions;
use crate::error::{QuantityError, QuantityResult};
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::registry::UnitId;
use crate::scalar::Scalar;
use crate::symbol::write_label;
use crate::unit::Unit;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const TOO_MANY_FACTORS: &str = "too many constituent units or exponent overflow";

/// A unit known at runtime.
///
/// Named units keep their symbol; products, quotients and [`DynUnit::derived`] compositions are
/// labelled from their constituents, like the typed [`Prod`](crate::Prod) and
/// [`Per`](crate::Per).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynUnit {
    composition: Composition,
    ratio: Ratio,
    symbol: &'static str,
}

impl DynUnit {
    /// The unit of pure numbers.
    pub const DIMENSIONLESS: Self = Self {
        composition: Composition::DIMENSIONLESS,
        ratio: Ratio::ONE,
        symbol: "",
    };

    /// Runtime handle on the typed unit `U`.
    pub const fn of<U: Unit>() -> Self {
        Self {
            composition: U::COMPOSITION,
            ratio: U::RATIO,
            symbol: U::SYMBOL,
        }
    }

    /// Composes catalogue units raised to exponents, e.g. `[(Kilogram, 1), (Meter, 1), (Second, -2)]`.
    ///
    /// ```rust
    /// use magnitude_core::{Dimensions, DynUnit, UnitId};
    ///
    /// let force = DynUnit::derived(&[
    ///     (UnitId::Kilogram, 1),
    ///     (UnitId::Meter, 1),
    ///     (UnitId::Second, -2),
    /// ])
    /// .unwrap();
    /// assert_eq!(force.dimension(), Dimensions::FORCE);
    /// assert_eq!(force.to_string(), "kg*m*s-2");
    /// ```
    pub fn derived(factors: &[(UnitId, i8)]) -> QuantityResult<Self> {
        if factors.is_empty() {
            return Err(invalid_composition(
                "a derived magnitude needs at least one constituent unit",
            ));
        }
        let mut composition = Composition::DIMENSIONLESS;
        for &(id, exponent) in factors {
            if exponent == 0 {
                return Err(invalid_composition(
                    "constituent units of a derived magnitude need a non-zero exponent",
                ));
            }
            composition = id
                .composition()
                .try_pow(exponent)
                .and_then(|c| composition.try_product(c))
                .ok_or_else(|| invalid_composition(TOO_MANY_FACTORS))?;
        }
        Self::composed(composition)
    }

    fn composed(composition: Composition) -> QuantityResult<Self> {
        if composition.checked_dimensions().is_none() {
            return Err(invalid_composition("exponent out of range"));
        }
        let ratio = composition
            .checked_ratio()
            .ok_or_else(|| invalid_composition("ratio overflow"))?;
        Ok(Self {
            composition,
            ratio,
            symbol: "",
        })
    }

    /// `self * other`.
    pub fn product(&self, other: &Self) -> QuantityResult<Self> {
        self.composition
            .try_product(other.composition)
            .ok_or_else(|| invalid_composition(TOO_MANY_FACTORS))
            .and_then(Self::composed)
    }

    /// `self / other`.
    pub fn quotient(&self, other: &Self) -> QuantityResult<Self> {
        self.composition
            .try_quotient(other.composition)
            .ok_or_else(|| invalid_composition(TOO_MANY_FACTORS))
            .and_then(Self::composed)
    }

    /// Dimension vector.
    pub const fn dimension(&self) -> Dimensions {
        self.composition.dimensions()
    }

    /// Ratio to the reference units of the dimension vector.
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Constituent base units.
    pub const fn composition(&self) -> Composition {
        self.composition
    }

    /// Own symbol, empty for composed units.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// `true` when both units measure the same kind of quantity.
    pub const fn is_compatible(&self, other: &Self) -> bool {
        self.dimension().same_as(&other.dimension())
    }

    /// Factor turning an amount in `self` into an amount in `target`.
    pub fn conversion_factor(&self, target: &Self) -> QuantityResult<f64> {
        self.ensure_compatible(target)?;
        Ok(match self.ratio.checked_div(target.ratio) {
            Some(factor) => factor.to_f64(),
            None => self.ratio.to_f64() / target.ratio.to_f64(),
        })
    }

    fn ensure_compatible(&self, other: &Self) -> QuantityResult<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            log::debug!("dimension mismatch between `{}` and `{}`", self, other);
            Err(QuantityError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            })
        }
    }

    fn rescale(&self, amount: f64, target: &Self) -> f64 {
        match self.ratio.checked_div(target.ratio) {
            Some(factor) => amount.rescale(factor),
            None => amount * self.ratio.to_f64() / target.ratio.to_f64(),
        }
    }

    fn parse_factor(text: &str) -> QuantityResult<(UnitId, i8)> {
        let digits = text
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);
        let split = match digits {
            Some(i) if text[..i].ends_with('-') => i - 1,
            Some(i) => i,
            None => text.len(),
        };
        let (symbol, exponent) = text.split_at(split);
        let exponent = if exponent.is_empty() {
            1
        } else {
            exponent.parse::<i8>().map_err(|_| {
                log::debug!("exponent out of range in `{}`", text);
                invalid_composition("exponent out of range")
            })?
        };
        Ok((symbol.parse()?, exponent))
    }
}

fn invalid_composition(reason: &str) -> QuantityError {
    log::debug!("invalid unit composition: {}", reason);
    QuantityError::InvalidComposition(reason.to_string())
}

impl From<UnitId> for DynUnit {
    fn from(id: UnitId) -> Self {
        id.unit()
    }
}

impl Display for DynUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut label = String::new();
        write_label(&mut label, self.symbol, &self.composition)?;
        f.write_str(label.trim_start())
    }
}

impl FromStr for DynUnit {
    type Err = QuantityError;

    /// Accepts a catalogue symbol or name (`"km/h"`, `"newton"`), a synthesized label
    /// (`"kg*m*s-2"`), or `""`/`"1"` for dimensionless.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "1" {
            return Ok(Self::DIMENSIONLESS);
        }
        if let Some(id) = UnitId::lookup(s) {
            return Ok(id.unit());
        }
        let factors = s
            .split('*')
            .map(|part| Self::parse_factor(part.trim()))
            .collect::<QuantityResult<Vec<_>>>()?;
        Self::derived(&factors)
    }
}

/// A quantity whose unit is known at runtime. The amount is an `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Repr", into = "Repr")
)]
pub struct DynQuantity {
    amount: f64,
    unit: DynUnit,
}

impl DynQuantity {
    /// `amount` of `unit`.
    pub const fn new(amount: f64, unit: DynUnit) -> Self {
        Self { amount, unit }
    }

    /// The amount in [`DynQuantity::unit`].
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// The unit tag.
    pub const fn unit(&self) -> DynUnit {
        self.unit
    }

    /// Same physical amount expressed in `target`.
    pub fn convert(&self, target: DynUnit) -> QuantityResult<Self> {
        self.unit.ensure_compatible(&target)?;
        let amount = self.unit.rescale(self.amount, &target);
        log::trace!("converted {} to {}{}", self, amount, UnitLabel(&target));
        Ok(Self::new(amount, target))
    }

    /// `self + other`, in the unit of `self`.
    pub fn try_add(&self, other: &Self) -> QuantityResult<Self> {
        Ok(Self::new(self.amount + self.rhs_amount(other)?, self.unit))
    }

    /// `self - other`, in the unit of `self`.
    pub fn try_sub(&self, other: &Self) -> QuantityResult<Self> {
        Ok(Self::new(self.amount - self.rhs_amount(other)?, self.unit))
    }

    fn rhs_amount(&self, other: &Self) -> QuantityResult<f64> {
        self.unit.ensure_compatible(&other.unit)?;
        Ok(other.unit.rescale(other.amount, &self.unit))
    }

    /// `self * other`, in the product of both units (amounts are not rescaled).
    pub fn try_mul(&self, other: &Self) -> QuantityResult<Self> {
        let unit = self.unit.product(&other.unit)?;
        Ok(Self::new(self.amount * other.amount, unit))
    }

    /// `self / other`, in the quotient of both units (amounts are not rescaled).
    pub fn try_div(&self, other: &Self) -> QuantityResult<Self> {
        if other.amount == 0.0 {
            log::debug!("division of {} by a zero amount", self);
            return Err(QuantityError::DivisionByZero);
        }
        let unit = self.unit.quotient(&other.unit)?;
        Ok(Self::new(self.amount / other.amount, unit))
    }

    /// Converts into the typed quantity of unit `U`.
    ///
    /// ```rust
    /// use magnitude_core::mass::Hectogram;
    /// use magnitude_core::DynQuantity;
    ///
    /// let q: DynQuantity = "3 kg".parse().unwrap();
    /// assert_eq!(q.to_typed::<Hectogram>().unwrap().amount(), 30.0);
    /// ```
    pub fn to_typed<U: Unit>(&self) -> QuantityResult<Quantity<U>> {
        self.convert(DynUnit::of::<U>())
            .map(|q| Quantity::new(q.amount))
    }
}

impl<U: Unit, T: Scalar> From<Quantity<U, T>> for DynQuantity {
    fn from(quantity: Quantity<U, T>) -> Self {
        Self::new(quantity.amount().to_f64(), DynUnit::of::<U>())
    }
}

struct UnitLabel<'a>(&'a DynUnit);

impl Display for UnitLabel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_label(f, self.0.symbol, &self.0.composition)
    }
}

impl Display for DynQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.amount, f)?;
        UnitLabel(&self.unit).fmt(f)
    }
}

impl FromStr for DynQuantity {
    type Err = QuantityError;

    /// Parses `"<amount> <unit>"`; a bare amount is dimensionless. `NaN` and infinite amounts are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (text, unit) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let amount = text
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| {
                log::debug!("invalid amount in `{}`", s);
                QuantityError::InvalidAmount(text.to_string())
            })?;
        Ok(Self::new(amount, unit.parse()?))
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct Repr {
    amount: f64,
    unit: String,
}

#[cfg(feature = "serde")]
impl From<DynQuantity> for Repr {
    fn from(quantity: DynQuantity) -> Self {
        Self {
            amount: quantity.amount,
            unit: quantity.unit.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Repr> for DynQuantity {
    type Error = QuantityError;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        Ok(Self::new(repr.amount, repr.unit.parse()?))
    }
}
