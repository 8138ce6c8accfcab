//! Frequency units (`1 / Time`).
//!
//! ```rust
//! use magnitude_core::frequency::Hertz;
//! use magnitude_core::time::Seconds;
//! use magnitude_core::Unitless;
//!
//! let cycles = magnitude_core::Quantity::<Unitless>::new(50.0);
//! let f = (cycles / Seconds::new(1.0)).to::<Hertz>();
//! assert_eq!(f.to_string(), "50 Hz");
//! ```

use crate::units::time::{Millisecond, Minute, Second};
use crate::{Quantity, Unit};

/// Hertz, `s⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", factors(Second = -1))]
pub struct Hertz;
/// One hertz.
pub const HZ: Quantity<Hertz> = Quantity::new(1.0);

/// Kilohertz, `ms⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", factors(Millisecond = -1))]
pub struct Kilohertz;
/// One kilohertz.
pub const KHZ: Quantity<Kilohertz> = Quantity::new(1.0);

/// Revolutions (or any count) per minute, `min⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", factors(Minute = -1))]
pub struct PerMinute;

crate::impl_unit_conversions!(Hertz, Kilohertz, PerMinute);
