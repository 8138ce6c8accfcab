//! Thermodynamic temperature.
//!
//! Only absolute (kelvin) temperatures are modelled: conversions are purely multiplicative, so
//! offset scales such as Celsius or Fahrenheit have no unit here.

use crate::{Quantity, Unit};

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Temperature, ratio = 1)]
pub struct Kelvin;
/// A quantity measured in kelvins.
pub type Kelvins = Quantity<Kelvin>;
/// One kelvin.
pub const KELVIN: Kelvins = Kelvins::new(1.0);

/// Millikelvin (`1/1000 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mK", dimension = Temperature, ratio = 1 / 1000)]
pub struct Millikelvin;
/// A quantity measured in millikelvins.
pub type Millikelvins = Quantity<Millikelvin>;

crate::impl_unit_conversions!(Kelvin, Millikelvin);
