//! Physical quantities with compile-time dimensional analysis.
//!
//! `magnitude` is the user-facing crate in this workspace. It re-exports the full API from
//! `magnitude-core` plus the predefined units (mass, length, time, electric current, temperature,
//! amount of substance, luminous intensity and a set of derived units).
//!
//! A value is always a `Quantity<U, T>`, where `U` is a zero-sized type describing the unit and `T`
//! the amount type. Units are checked at compile time with no runtime overhead beyond the amount.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to kilograms).
//! - Makes unit conversion explicit and exact (`to::<TargetUnit>()` scales by a reduced integer
//!   ratio).
//! - Synthesizes labels for composed units (`kg*m*s-2`).
//! - Offers a runtime layer (`DynQuantity`) for units read from text or configuration.
//!
//! # What this crate does not try to solve
//!
//! - Offset units (degrees Celsius, Fahrenheit): every conversion is a pure scaling.
//! - Simplifying composed units to named ones automatically; use `to::<Newton>()` explicitly.
//!
//! # Quick start
//!
//! ```rust
//! use magnitude::{Hectograms, Kilograms};
//!
//! let sum = Kilograms::new(3000.0) + Hectograms::new(72.0);
//! assert_eq!(sum.to_string(), "3007.2 kg");
//!
//! let sum = Hectograms::new(72.0) + Kilograms::new(3000.0);
//! assert_eq!(sum.to_string(), "30072 hg");
//! ```
//!
//! Compose and use derived units (velocity = length / time):
//!
//! ```rust
//! use magnitude::{Kilometer, Kilometers, KilometersPerHour, Second, Seconds};
//! use magnitude::velocity::Velocity;
//!
//! let d = Kilometers::new(1_000.0);
//! let t = Seconds::new(100.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.amount() - 10.0).abs() < 1e-12);
//! assert!((v.to::<KilometersPerHour>().amount() - 36_000.0).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use magnitude::{Kilograms, Meters};
//!
//! let _ = Kilograms::new(1.0) + Meters::new(2.0); // dimension mismatch
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for
//! convenience):
//!
//! - `magnitude::mass` (milligram … tonne)
//! - `magnitude::length` (millimetre … kilometre)
//! - `magnitude::time` (millisecond … week)
//! - `magnitude::electric` (ampere, coulomb, volt)
//! - `magnitude::thermodynamics`, `magnitude::substance`, `magnitude::photometry`
//! - `magnitude::velocity` (`m/s`, `km/h`, `Velocity<L, T>`)
//! - `magnitude::frequency` (`Hz`, `kHz`, `rpm`)
//! - `magnitude::mechanics` (newton, joule, watt)
//!
//! # Feature flags
//!
//! - `std` (default): enables the runtime layer (`DynQuantity`, `DynUnit`, `UnitId`,
//!   `QuantityError`).
//! - `serde`: serialization for `Quantity<U, T>` and `DynQuantity`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! magnitude = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Typed operations reject unit errors at compile time. The runtime layer returns
//! `QuantityResult` values instead of panicking.
//!
//! Typed dimension mismatches surface during monomorphization: `cargo build` reports them, while
//! `cargo check` and rust-analyzer accept the code.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use magnitude_core::*;

pub use magnitude_core::units::electric::*;
pub use magnitude_core::units::frequency::*;
pub use magnitude_core::units::length::*;
pub use magnitude_core::units::mass::*;
pub use magnitude_core::units::mechanics::*;
pub use magnitude_core::units::photometry::*;
pub use magnitude_core::units::substance::*;
pub use magnitude_core::units::thermodynamics::*;
pub use magnitude_core::units::time::*;
pub use magnitude_core::units::velocity::*;
