//! Velocity units (`Length / Time`).
//!
//! Two named velocity units are provided, [`MetersPerSecond`] and [`KilometersPerHour`]. Any other
//! velocity is written as [`Velocity<L, T>`], a quotient of a length and a time unit, which is also
//! what dividing a length quantity by a time quantity produces:
//!
//! ```rust
//! use magnitude_core::length::{Kilometer, Kilometers};
//! use magnitude_core::time::{Second, Seconds};
//! use magnitude_core::velocity::{MetersPerSecond, Velocity};
//!
//! let v: Velocity<Kilometer, Second> = Kilometers::new(42.0) / Seconds::new(2.0);
//! assert!((v.amount() - 21.0).abs() < 1e-12);
//! assert!((v.to::<MetersPerSecond>().amount() - 21_000.0).abs() < 1e-9);
//! ```
//!
//! Adding velocities keeps the unit of the left operand:
//!
//! ```rust
//! use magnitude_core::velocity::{KilometersPerHour, MetersPerSecond};
//! use magnitude_core::Quantity;
//!
//! let v = Quantity::<MetersPerSecond>::new(10.0) + Quantity::<KilometersPerHour>::new(36.0);
//! assert_eq!(v.to_string(), "20 m/s");
//! ```

use crate::units::length::{Kilometer, Meter};
use crate::units::time::{Hour, Second};
use crate::{Per, Quantity, Unit};

/// Metre per second, `m¹ s⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", factors(Meter = 1, Second = -1))]
pub struct MetersPerSecond;
/// One metre per second.
pub const MPS: Quantity<MetersPerSecond> = Quantity::new(1.0);

/// Kilometre per hour, `km¹ h⁻¹` (`5/18 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", factors(Kilometer = 1, Hour = -1))]
pub struct KilometersPerHour;
/// One kilometre per hour.
pub const KMH: Quantity<KilometersPerHour> = Quantity::new(1.0);

/// A velocity quantity parameterized by length and time units.
///
/// ```rust
/// use magnitude_core::length::{Kilometer, Meter};
/// use magnitude_core::time::{Hour, Second};
/// use magnitude_core::velocity::Velocity;
///
/// let v1: Velocity<Meter, Second> = Velocity::new(10.0);
/// let v2: Velocity<Kilometer, Hour> = v1.to();
/// assert!((v2.amount() - 36.0).abs() < 1e-12);
/// ```
pub type Velocity<N, D> = Quantity<Per<N, D>>;

crate::impl_unit_conversions!(MetersPerSecond, KilometersPerHour);
