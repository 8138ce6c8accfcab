//! Amount of substance.

use crate::{Quantity, Unit};

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", dimension = Amount, ratio = 1)]
pub struct Mole;
/// A quantity measured in moles.
pub type Moles = Quantity<Mole>;
/// One mole.
pub const MOLE: Moles = Moles::new(1.0);

/// Millimole (`1/1000 mol`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mmol", dimension = Amount, ratio = 1 / 1000)]
pub struct Millimole;
/// A quantity measured in millimoles.
pub type Millimoles = Quantity<Millimole>;

crate::impl_unit_conversions!(Mole, Millimole);
