//! Mechanical units: force, energy and power.
//!
//! Every unit here is a named derived magnitude declared from base units, so its ratio and
//! dimensions are computed from the declared constituents. A product or quotient of quantities with
//! matching dimensions converts to them directly:
//!
//! ```rust
//! use magnitude_core::length::Meters;
//! use magnitude_core::mass::Kilograms;
//! use magnitude_core::mechanics::Newton;
//! use magnitude_core::time::Seconds;
//!
//! let accel = Meters::new(9.81) / (Seconds::new(1.0) * Seconds::new(1.0));
//! let weight = (Kilograms::new(10.0) * accel).to::<Newton>();
//! assert!((weight.amount() - 98.1).abs() < 1e-9);
//! assert_eq!(format!("{:.1}", weight), "98.1 N");
//! ```

use crate::units::length::{Kilometer, Meter};
use crate::units::mass::{Kilogram, Tonne};
use crate::units::time::Second;
use crate::{Quantity, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Force
// ─────────────────────────────────────────────────────────────────────────────

/// Newton, `kg m s⁻²`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", factors(Kilogram = 1, Meter = 1, Second = -2))]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;
/// One newton.
pub const NEWTON: Newtons = Newtons::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Joule, `kg m² s⁻²`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", factors(Kilogram = 1, Meter = 2, Second = -2))]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;
/// One joule.
pub const JOULE: Joules = Joules::new(1.0);

/// Kilojoule, `kg m km s⁻²`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kJ", factors(Kilogram = 1, Meter = 1, Kilometer = 1, Second = -2))]
pub struct Kilojoule;
/// A quantity measured in kilojoules.
pub type Kilojoules = Quantity<Kilojoule>;
/// One kilojoule.
pub const KILOJOULE: Kilojoules = Kilojoules::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

/// Watt, `kg m² s⁻³`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", factors(Kilogram = 1, Meter = 2, Second = -3))]
pub struct Watt;
/// A quantity measured in watts.
pub type Watts = Quantity<Watt>;
/// One watt.
pub const WATT: Watts = Watts::new(1.0);

/// Kilowatt, `t m² s⁻³`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kW", factors(Tonne = 1, Meter = 2, Second = -3))]
pub struct Kilowatt;
/// A quantity measured in kilowatts.
pub type Kilowatts = Quantity<Kilowatt>;
/// One kilowatt.
pub const KILOWATT: Kilowatts = Kilowatts::new(1.0);

crate::impl_unit_conversions!(Joule, Kilojoule);
crate::impl_unit_conversions!(Watt, Kilowatt);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Meters;
    use crate::units::mass::Kilograms;
    use crate::units::time::{Hours, Seconds};
    use crate::units::velocity::MetersPerSecond;
    use crate::{Dimensions, Ratio};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dimensions() {
        assert_eq!(Newton::DIMENSION, Dimensions::FORCE);
        assert_eq!(Joule::DIMENSION, Dimensions::ENERGY);
        assert_eq!(Kilojoule::DIMENSION, Dimensions::ENERGY);
        assert_eq!(Watt::DIMENSION, Dimensions::POWER);
        assert_eq!(Kilowatt::DIMENSION, Dimensions::POWER);
    }

    #[test]
    fn ratios_follow_the_constituents() {
        assert_eq!(Newton::RATIO, Ratio::integer(1000));
        assert_eq!(Joule::RATIO, Ratio::integer(1000));
        assert_eq!(Kilojoule::RATIO, Ratio::integer(1_000_000));
        assert_eq!(Watt::RATIO, Ratio::integer(1000));
        assert_eq!(Kilowatt::RATIO, Ratio::integer(1_000_000));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composition through arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn force_times_distance_is_energy() {
        let work = (Newtons::new(5.0) * Meters::new(3.0)).to::<Joule>();
        assert_abs_diff_eq!(work.amount(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn energy_over_time_is_power() {
        let p = (Joules::new(3600.0) / Seconds::new(60.0)).to::<Watt>();
        assert_abs_diff_eq!(p.amount(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn kilowatt_hour_in_joules() {
        let energy = (KILOWATT * Hours::new(1.0)).to::<Joule>();
        assert_abs_diff_eq!(energy.amount(), 3.6e6, epsilon = 1e-6);
        assert_abs_diff_eq!(energy.to::<Kilojoule>().amount(), 3600.0, epsilon = 1e-9);
    }

    #[test]
    fn kinetic_energy() {
        let v = Quantity::<MetersPerSecond>::new(20.0);
        let e = (Kilograms::new(1000.0) * v * v / 2.0).to::<Kilojoule>();
        assert_abs_diff_eq!(e.amount(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn synthesized_label_of_an_unnamed_product() {
        let q = Newtons::new(2.0) * Meters::new(3.0);
        assert_eq!(q.to_string(), "6 kg*m2*s-2");
        assert_eq!(q.to::<Joule>().to_string(), "6 J");
    }

    #[test]
    fn from_conversions() {
        let w: Watts = KILOWATT.into();
        assert_eq!(w.amount(), 1000.0);
        let kj: Kilojoules = JOULE.into();
        assert_abs_diff_eq!(kj.amount(), 1e-3, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn prop_power_roundtrip(w in 1e-3..1e9f64) {
            let back = Watts::new(w).to::<Kilowatt>().to::<Watt>();
            prop_assert!((back.amount() - w).abs() <= 1e-9 * w);
        }
    }
}
