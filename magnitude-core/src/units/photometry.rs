//! Luminous intensity.

use crate::{Quantity, Unit};

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", dimension = LuminousIntensity, ratio = 1)]
pub struct Candela;
/// A quantity measured in candelas.
pub type Candelas = Quantity<Candela>;
/// One candela.
pub const CANDELA: Candelas = Candelas::new(1.0);
