//! Runtime catalogue of the predefined units.
//!
//! [`UnitId`] names every unit of [`crate::units`] so that units can be chosen at runtime, e.g. from
//! a configuration file or user input. Each identifier resolves to a [`DynUnit`] carrying the same
//! dimensions, ratio and symbol as the typed unit.
//!
//! ```rust
//! use magnitude_core::UnitId;
//!
//! let id: UnitId = "km/h".parse().unwrap();
//! assert_eq!(id, UnitId::KilometersPerHour);
//! assert_eq!(id.name(), "kilometer per hour");
//! assert!(id.unit().is_compatible(&UnitId::MetersPerSecond.unit()));
//! ```

use crate::composition::Composition;
use crate::dimension::Dimensions;
use crate::dynamic::DynUnit;
use crate::error::QuantityError;
use crate::ratio::Ratio;
use crate::unit::Unit;
use crate::units::electric::{Ampere, Coulomb, Milliampere, Volt};
use crate::units::frequency::{Hertz, Kilohertz, PerMinute};
use crate::units::length::{Centimeter, Kilometer, Meter, Millimeter};
use crate::units::mass::{Decagram, Gram, Hectogram, Kilogram, Milligram, Tonne};
use crate::units::mechanics::{Joule, Kilojoule, Kilowatt, Newton, Watt};
use crate::units::photometry::Candela;
use crate::units::substance::{Millimole, Mole};
use crate::units::thermodynamics::{Kelvin, Millikelvin};
use crate::units::time::{Day, Hour, Millisecond, Minute, Second, Week};
use crate::units::velocity::{KilometersPerHour, MetersPerSecond};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

macro_rules! catalogue {
    ($($variant:ident => $unit:ty, $name:literal;)+) => {
        /// Identifier of a predefined unit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum UnitId {
            $(
                #[doc = concat!("[`", stringify!($unit), "`] (", $name, ").")]
                $variant,
            )+
        }

        impl UnitId {
            /// Every catalogue entry, grouped by dimension.
            pub const ALL: &'static [UnitId] = &[$(UnitId::$variant,)+];

            /// Printable symbol of the unit.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(UnitId::$variant => <$unit as Unit>::SYMBOL,)+
                }
            }

            /// Lower-case English name of the unit.
            pub const fn name(self) -> &'static str {
                match self {
                    $(UnitId::$variant => $name,)+
                }
            }

            /// Dimension vector of the unit.
            pub const fn dimension(self) -> Dimensions {
                match self {
                    $(UnitId::$variant => <$unit as Unit>::DIMENSION,)+
                }
            }

            /// Ratio of the unit to the reference units of its dimensions.
            pub const fn ratio(self) -> Ratio {
                match self {
                    $(UnitId::$variant => <$unit as Unit>::RATIO,)+
                }
            }

            /// Constituent base units.
            pub const fn composition(self) -> Composition {
                match self {
                    $(UnitId::$variant => <$unit as Unit>::COMPOSITION,)+
                }
            }

            /// Runtime handle on the unit.
            pub fn unit(self) -> DynUnit {
                match self {
                    $(UnitId::$variant => DynUnit::of::<$unit>(),)+
                }
            }
        }
    };
}

catalogue! {
    Milligram => Milligram, "milligram";
    Gram => Gram, "gram";
    Decagram => Decagram, "decagram";
    Hectogram => Hectogram, "hectogram";
    Kilogram => Kilogram, "kilogram";
    Tonne => Tonne, "tonne";

    Millimeter => Millimeter, "millimeter";
    Centimeter => Centimeter, "centimeter";
    Meter => Meter, "meter";
    Kilometer => Kilometer, "kilometer";

    Millisecond => Millisecond, "millisecond";
    Second => Second, "second";
    Minute => Minute, "minute";
    Hour => Hour, "hour";
    Day => Day, "day";
    Week => Week, "week";

    Milliampere => Milliampere, "milliampere";
    Ampere => Ampere, "ampere";
    Millikelvin => Millikelvin, "millikelvin";
    Kelvin => Kelvin, "kelvin";
    Millimole => Millimole, "millimole";
    Mole => Mole, "mole";
    Candela => Candela, "candela";

    MetersPerSecond => MetersPerSecond, "meter per second";
    KilometersPerHour => KilometersPerHour, "kilometer per hour";
    Hertz => Hertz, "hertz";
    Kilohertz => Kilohertz, "kilohertz";
    PerMinute => PerMinute, "per minute";
    Newton => Newton, "newton";
    Joule => Joule, "joule";
    Kilojoule => Kilojoule, "kilojoule";
    Watt => Watt, "watt";
    Kilowatt => Kilowatt, "kilowatt";
    Coulomb => Coulomb, "coulomb";
    Volt => Volt, "volt";
}

impl UnitId {
    /// `true` for units measuring a single base dimension with exponent one.
    pub fn is_base(self) -> bool {
        match self.composition().factors() {
            [factor] => factor.exponent() == 1 && factor.symbol() == self.symbol(),
            _ => false,
        }
    }

    /// Looks a unit up by symbol (case-sensitive) or by name (case-insensitive).
    pub fn lookup(text: &str) -> Option<UnitId> {
        let text = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.symbol() == text)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|id| id.name().eq_ignore_ascii_case(text))
            })
    }
}

impl Display for UnitId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitId {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            log::debug!("unknown unit `{}`", s);
            QuantityError::UnknownUnit(s.trim().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symbols_and_names_are_unique() {
        let symbols: HashSet<_> = UnitId::ALL.iter().map(|id| id.symbol()).collect();
        let names: HashSet<_> = UnitId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(symbols.len(), UnitId::ALL.len());
        assert_eq!(names.len(), UnitId::ALL.len());
    }

    #[test]
    fn entries_match_the_typed_units() {
        assert_eq!(UnitId::Kilogram.ratio(), Kilogram::RATIO);
        assert_eq!(UnitId::Newton.dimension(), Dimensions::FORCE);
        assert_eq!(UnitId::KilometersPerHour.ratio(), Ratio::new(5, 18));
        assert_eq!(UnitId::Day.composition(), Day::COMPOSITION);
        assert_eq!(UnitId::Volt.unit(), DynUnit::of::<Volt>());
    }

    #[test]
    fn base_units() {
        assert_eq!(UnitId::ALL.iter().filter(|id| id.is_base()).count(), 23);
        assert!(UnitId::Kilogram.is_base());
        assert!(UnitId::Candela.is_base());
        assert!(!UnitId::Newton.is_base());
        assert!(!UnitId::Hertz.is_base());
    }

    #[test]
    fn parse_by_symbol_or_name() {
        assert_eq!("kg".parse::<UnitId>(), Ok(UnitId::Kilogram));
        assert_eq!("Kilogram".parse::<UnitId>(), Ok(UnitId::Kilogram));
        assert_eq!(" m/s ".parse::<UnitId>(), Ok(UnitId::MetersPerSecond));
        assert_eq!("meter per second".parse::<UnitId>(), Ok(UnitId::MetersPerSecond));
        assert_eq!("Mg".parse::<UnitId>(), Err(QuantityError::UnknownUnit("Mg".into())));
        assert_eq!(UnitId::Hour.to_string(), "h");
    }
}
