//! Core type system for dimensionally checked physical quantities.
//!
//! `magnitude-core` models units the SI way:
//!
//! - A *dimension vector* ([`Dimensions`]) holds one integer exponent per base dimension (mass,
//!   length, time, current, temperature, amount of substance, luminous intensity).
//! - A *unit* is a zero-sized marker type implementing [`Unit`]: an exact [`Ratio`] to the reference
//!   unit of its dimensions, the dimension vector, its [`Composition`] of base units and a symbol.
//! - A value tagged with a unit is a [`Quantity<U, T>`], generic over the amount type `T`
//!   (any primitive integer or float, `f64` by default).
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`]. Converting between units
//!   of different dimensions does not compile.
//!
//! Most users should depend on `magnitude` (the facade crate) rather than on this crate directly.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use magnitude_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.amount() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Addition keeps the unit of the left operand and rescales the right one:
//!
//! ```rust
//! use magnitude_core::mass::{Hectograms, Kilograms};
//!
//! let total = Kilograms::new(3000.0) + Hectograms::new(72.0);
//! assert_eq!(total.to_string(), "3007.2 kg");
//! ```
//!
//! Multiplication and division compose units instead of rescaling:
//!
//! ```rust
//! use magnitude_core::length::{Meter, Meters};
//! use magnitude_core::time::{Second, Seconds};
//! use magnitude_core::velocity::{MetersPerSecond, Velocity};
//!
//! let v: Velocity<Meter, Second> = Meters::new(100.0) / Seconds::new(20.0);
//! assert_eq!(v.to_string(), "5 m*s-1");
//! assert_eq!(v.to::<MetersPerSecond>().to_string(), "5 m/s");
//! ```
//!
//! Mixing dimensions is a compile error:
//!
//! ```compile_fail
//! use magnitude_core::length::Meters;
//! use magnitude_core::time::Seconds;
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `magnitude-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! magnitude-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! The typed layer ([`Quantity`], units, labels) is available without `std`; the runtime layer is
//! not.
//!
//! # Feature flags
//!
//! - `std` (default): enables the runtime layer ([`DynUnit`], [`DynQuantity`], [`UnitId`]) and its
//!   [`QuantityError`].
//! - `serde`: `Quantity<U, T>` serializes as its bare amount, [`serde_with_unit`] keeps the unit
//!   label alongside it and `DynQuantity` serializes as `{ "amount", "unit" }`.
//!
//! # Panics and errors
//!
//! Typed operations never fail at runtime because of units: dimension mismatches and invalid unit
//! declarations are rejected while compiling. Amount arithmetic follows the amount type (IEEE-754
//! for floats, a panic on integer division by zero). The runtime layer returns a
//! [`QuantityResult`] for every operation that can mix dimensions, divide by zero or parse text.
//!
//! Dimension mismatches are reported while evaluating the `Rescale` constant, which happens at
//! monomorphization. `cargo build` and `cargo test` reject `Kilograms + Meters`; `cargo check` and
//! rust-analyzer do not evaluate that constant and accept it.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod composition;
mod dimension;
mod macros;
mod quantity;
mod ratio;
mod scalar;
mod unit;

/// Unit labels.
pub mod symbol;

#[cfg(feature = "std")]
mod dynamic;
#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use composition::{Composition, Factor, MAX_FACTORS};
pub use dimension::{BaseDimension, Dimensions, BASE_DIMENSIONS};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use scalar::{Promote, Scalar};
pub use unit::{BaseUnit, Per, Prod, Rescale, Unit, Unitless};

/// Derive macro declaring a unit; see the `magnitude-derive` crate.
pub use magnitude_derive::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

#[cfg(feature = "std")]
pub use dynamic::{DynQuantity, DynUnit};
#[cfg(feature = "std")]
pub use error::{QuantityError, QuantityResult};
#[cfg(feature = "std")]
pub use registry::UnitId;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `magnitude-core` so they can implement formatting and conversion traits
/// without running into Rust's orphan rules.
pub mod units;

pub use units::electric;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::photometry;
pub use units::substance;
pub use units::thermodynamics;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "tu", dimension = LuminousIntensity, ratio = 1)]
    pub struct TestUnit;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "dtu", dimension = LuminousIntensity, ratio = 2)]
    pub struct DoubleTestUnit;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "htu", dimension = LuminousIntensity, ratio = 1 / 2)]
    pub struct HalfTestUnit;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "tu/s", factors(TestUnit = 1, time::Second = -1))]
    pub struct TestRate;

    type TU = Quantity<TestUnit>;
    type Dtu = Quantity<DoubleTestUnit>;
    type Htu = Quantity<HalfTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived unit constants
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_base_unit_constants() {
        assert_eq!(DoubleTestUnit::RATIO, Ratio::integer(2));
        assert_eq!(HalfTestUnit::RATIO, Ratio::new(1, 2));
        assert_eq!(TestUnit::DIMENSION, Dimensions::LUMINOUS_INTENSITY);
        assert_eq!(TestUnit::BASE, BaseDimension::LuminousIntensity);
        assert_eq!(TestUnit::COMPOSITION.len(), 1);
        assert_eq!(HalfTestUnit::SYMBOL, "htu");
    }

    #[test]
    fn derived_magnitude_constants() {
        assert_eq!(
            TestRate::DIMENSION,
            Dimensions::LUMINOUS_INTENSITY.div(Dimensions::TIME)
        );
        assert_eq!(TestRate::RATIO, Ratio::ONE);
        assert_eq!(TestRate::COMPOSITION, <Per<TestUnit, time::Second>>::COMPOSITION);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_conversion_to_same_unit() {
        assert_eq!(TU::new(10.0).to::<TestUnit>().amount(), 10.0);
    }

    #[test]
    fn quantity_conversion_to_different_unit() {
        // 1 dtu = 2 tu, 1 htu = 1/2 tu
        assert_eq!(TU::new(10.0).to::<DoubleTestUnit>().amount(), 5.0);
        assert_eq!(TU::new(10.0).to::<HalfTestUnit>().amount(), 20.0);
        assert_eq!(Dtu::new(1.0).to::<HalfTestUnit>().amount(), 4.0);
    }

    #[test]
    fn integer_conversion_truncates() {
        let q: Quantity<TestUnit, i32> = Quantity::new(7);
        assert_eq!(q.to::<DoubleTestUnit>().amount(), 3);
        assert_eq!(q.to::<HalfTestUnit>().amount(), 14);
    }

    #[test]
    fn quantity_conversion_roundtrip() {
        let original = TU::new(100.0);
        let back = original.to::<DoubleTestUnit>().to::<TestUnit>();
        assert!((back.amount() - original.amount()).abs() < 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_and_sub_keep_left_unit() {
        let sum = TU::new(3.0) + Dtu::new(2.0);
        assert_eq!(sum.amount(), 7.0);
        assert_eq!(sum.to_string(), "7 tu");
        assert_eq!((Htu::new(10.0) - TU::new(1.0)).amount(), 8.0);
    }

    #[test]
    fn operator_mul_and_div_compose() {
        let product: Quantity<Prod<TestUnit, DoubleTestUnit>> = TU::new(4.0) * Dtu::new(5.0);
        assert_eq!(product.amount(), 20.0);
        assert_eq!(product.to_string(), "20 tu*dtu");

        let ratio: Quantity<Per<TestUnit, DoubleTestUnit>> = TU::new(100.0) / Dtu::new(20.0);
        assert_eq!(ratio.amount(), 5.0);
        assert_eq!(ratio.to::<Unitless>().amount(), 2.5);
    }

    #[test]
    fn rate_times_time() {
        let rate: Quantity<TestRate> = Quantity::new(5.0);
        let total = rate * time::Minutes::new(2.0);
        assert_eq!(total.to::<TestUnit>().amount(), 600.0);
        assert_eq!(total.to_string(), "10 tu*s-1*min");
    }

    #[test]
    fn mixed_amount_types_promote() {
        let a: Quantity<TestUnit, i32> = Quantity::new(3);
        let b: Quantity<TestUnit, f64> = Quantity::new(0.5);
        let sum: Quantity<TestUnit, f64> = a + b;
        assert_eq!(sum.amount(), 3.5);
        let c: Quantity<TestUnit, i64> = Quantity::new(4);
        let wide: Quantity<TestUnit, i64> = a + c;
        assert_eq!(wide.amount(), 7);
    }

    #[test]
    fn scalar_ops() {
        let q = TU::new(5.0);
        assert_eq!((q * 3.0).amount(), 15.0);
        assert_eq!((3.0 * q).amount(), 15.0);
        assert_eq!((q / 2.0).amount(), 2.5);
        assert_eq!((-q).amount(), -5.0);
    }

    #[test]
    fn display_labels() {
        assert_eq!(TU::new(1.5).to_string(), "1.5 tu");
        assert_eq!(Quantity::<TestRate>::new(2.0).to_string(), "2 tu/s");
        assert_eq!(Quantity::<Unitless>::new(2.0).to_string(), "2");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity() {
            let q = TU::new(42.5);
            assert_eq!(serde_json::to_string(&q).unwrap(), "42.5");
            let n: Quantity<TestUnit, u32> = Quantity::new(7);
            assert_eq!(serde_json::to_string(&n).unwrap(), "7");
        }

        #[test]
        fn deserialize_quantity() {
            let q: TU = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.amount(), 42.5);
        }

        // ─────────────────────────────────────────────────────────────────────────
        // serde_with_unit module tests
        // ─────────────────────────────────────────────────────────────────────────

        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            intensity: TU,
            #[serde(with = "crate::serde_with_unit")]
            product: Quantity<Prod<TestUnit, DoubleTestUnit>>,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                intensity: TU::new(42.5),
                product: Quantity::new(2.0),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(
                json,
                r#"{"intensity":{"value":42.5,"unit":"tu"},"product":{"value":2.0,"unit":"tu*dtu"}}"#
            );
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"intensity":{"value":42.5,"unit":"tu"},"product":{"value":1.0}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.intensity.amount(), 42.5);
            assert_eq!(data.product.amount(), 1.0);
        }

        #[test]
        fn serde_with_unit_deserialize_wrong_unit() {
            let json = r#"{"intensity":{"value":42.5,"unit":"dtu"},"product":{"value":1.0}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err().to_string();
            assert!(err.contains("unit mismatch"));
        }

        #[test]
        fn serde_with_unit_deserialize_missing_value() {
            let json = r#"{"intensity":{"unit":"tu"},"product":{"value":1.0}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err().to_string();
            assert!(err.contains("missing field"));
        }

        #[test]
        fn serde_with_unit_deserialize_invalid_format() {
            let json = r#"{"intensity":"not_an_object","product":{"value":1.0}}"#;
            assert!(serde_json::from_str::<TestStruct>(json).is_err());
        }

        // ─────────────────────────────────────────────────────────────────────────
        // Configuration files
        // ─────────────────────────────────────────────────────────────────────────

        #[derive(Deserialize, Debug)]
        struct Limits {
            max_mass: mass::Kilograms,
            #[serde(with = "crate::serde_with_unit")]
            max_speed: Quantity<velocity::KilometersPerHour>,
            cruise: DynQuantity,
        }

        #[test]
        fn toml_configuration() {
            let limits: Limits = toml::from_str(
                r#"
                max_mass = 3500.0
                max_speed = { value = 130.0, unit = "km/h" }
                cruise = { amount = 25.0, unit = "m/s" }
                "#,
            )
            .unwrap();
            assert_eq!(limits.max_mass.amount(), 3500.0);
            assert_eq!(limits.max_speed.amount(), 130.0);
            let cruise = limits.cruise.to_typed::<velocity::KilometersPerHour>().unwrap();
            assert!((cruise.amount() - 90.0).abs() < 1e-9);
        }

        #[test]
        fn dyn_quantity_json() {
            let q: DynQuantity = "3 kg*m*s-2".parse().unwrap();
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, r#"{"amount":3.0,"unit":"kg*m*s-2"}"#);
            let back: DynQuantity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q);

            let named: DynQuantity = serde_json::from_str(r#"{"amount":1.5,"unit":"newton"}"#).unwrap();
            assert_eq!(named.to_string(), "1.5 N");

            let err = serde_json::from_str::<DynQuantity>(r#"{"amount":1.0,"unit":"furlong"}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("Unknown unit: furlong"));
        }
    }
}
