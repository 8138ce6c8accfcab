//! Electromagnetic units.
//!
//! [`Ampere`] is the reference unit for electric current; [`Coulomb`] and [`Volt`] are derived
//! from it.
//!
//! ```rust
//! use magnitude_core::electric::{Amperes, Coulomb};
//! use magnitude_core::time::Hours;
//!
//! let charge = (Amperes::new(2.0) * Hours::new(1.0)).to::<Coulomb>();
//! assert_eq!(charge.amount(), 7200.0);
//! ```

use crate::units::length::Meter;
use crate::units::mass::Kilogram;
use crate::units::time::Second;
use crate::{Quantity, Unit};

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Current, ratio = 1)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;
/// One ampere.
pub const AMPERE: Amperes = Amperes::new(1.0);

/// Milliampere (`1/1000 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mA", dimension = Current, ratio = 1 / 1000)]
pub struct Milliampere;
/// A quantity measured in milliamperes.
pub type Milliamperes = Quantity<Milliampere>;

/// Coulomb, `A s`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", factors(Ampere = 1, Second = 1))]
pub struct Coulomb;
/// A quantity measured in coulombs.
pub type Coulombs = Quantity<Coulomb>;

/// Volt, `kg m² s⁻³ A⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", factors(Kilogram = 1, Meter = 2, Second = -3, Ampere = -1))]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;
/// One volt.
pub const VOLT: Volts = Volts::new(1.0);

crate::impl_unit_conversions!(Ampere, Milliampere);
