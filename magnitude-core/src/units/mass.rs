//! Mass units.
//!
//! The reference unit for this dimension is [`Gram`] (`Gram::RATIO == 1`), so every other mass
//! unit states how many grams it holds.
//!
//! ```rust
//! use magnitude_core::mass::{Hectograms, Kilogram, Kilograms};
//!
//! let m = Kilograms::new(3000.0) + Hectograms::new(72.0);
//! assert_eq!(m.to_string(), "3007.2 kg");
//! assert_eq!(m.to::<Kilogram>().amount(), m.amount());
//! ```

use crate::{Quantity, Unit};

/// Gram, the reference mass unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, ratio = 1)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Helper macro to declare a gram-based SI mass unit.
///
/// Each invocation defines, for a given prefix on grams:
/// - a unit struct `$name` (e.g. `Kilogram`),
/// - a shorthand type alias `$alias` (e.g. `Kg`),
/// - a quantity type `$qty` (e.g. `Kilograms`), and
/// - a constant `$one` equal to `1.0` of that quantity.
///
/// `$ratio` is the exact number of grams in one `$name`.
macro_rules! si_gram {
    ($name:ident, $sym:literal, $ratio:expr, $alias:ident, $qty:ident, $one:ident) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` (symbol `", $sym, "`).")]
        #[doc = concat!("By definition, `1 ", $sym, " = ", stringify!($ratio), " g`.")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, dimension = Mass, ratio = $ratio)]
        pub struct $name;

        #[doc = concat!("Shorthand alias for [`", stringify!($name), "`].")]
        pub type $alias = $name;

        #[doc = concat!("Quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty = Quantity<$alias>;

        #[doc = concat!("Constant equal to one ", stringify!($name), " (1 ", $sym, ").")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

si_gram!(Milligram, "mg", 1 / 1000, Mg, Milligrams, MG);
si_gram!(Decagram, "dag", 10, Dag, Decagrams, DAG);
si_gram!(Hectogram, "hg", 100, Hg, Hectograms, HG);
si_gram!(Kilogram, "kg", 1000, Kg, Kilograms, KG);

/// Tonne (metric ton): `1 t = 1_000_000 g`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Mass, ratio = 1_000_000)]
pub struct Tonne;
/// Quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;
/// One tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

crate::impl_unit_conversions!(Gram, Milligram, Decagram, Hectogram, Kilogram, Tonne);
