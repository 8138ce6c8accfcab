//! Predefined unit modules grouped by dimension.
//!
//! `magnitude-core` ships a small catalogue of built-in units so that conversions and formatting
//! work out of the box without downstream crates having to fight Rust’s orphan rules.
//!
//! ## Modules
//!
//! - [`mass`]: mass units (gram is the reference unit).
//! - [`length`]: length units (metre is the reference unit).
//! - [`time`]: time units (second is the reference unit).
//! - [`electric`]: ampere plus the derived coulomb and volt.
//! - [`thermodynamics`]: kelvin.
//! - [`substance`]: mole.
//! - [`photometry`]: candela.
//! - [`velocity`]: metres per second, kilometres per hour and the generic [`velocity::Velocity`].
//! - [`frequency`]: hertz and friends.
//! - [`mechanics`]: newton, joule, watt.

pub mod electric;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod photometry;
pub mod substance;
pub mod thermodynamics;
pub mod time;
pub mod velocity;
