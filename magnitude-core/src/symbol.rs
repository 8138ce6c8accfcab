//! Unit labels.
//!
//! Named units print their own symbol. Composed units ([`Prod`](crate::Prod),
//! [`Per`](crate::Per)) have no symbol of their own, so their label is synthesized from the
//! composition: each constituent symbol in order, its exponent appended when it is not one, and
//! constituents joined by `*`. The label always starts with a space so it can follow an amount
//! directly:
//!
//! | composition                | label        |
//! |----------------------------|--------------|
//! | `kg¹`                      | ` kg`        |
//! | `kg¹ hg¹`                  | ` kg*hg`     |
//! | `kg¹ m¹ s⁻²`               | ` kg*m*s-2`  |
//! | empty (dimensionless)      | *(nothing)*  |

use crate::composition::Composition;
use crate::unit::Unit;
use core::fmt::{self, Display, Formatter, Write};
use core::marker::PhantomData;

/// Writes the synthesized label of `composition` into `out`.
///
/// ```rust
/// use magnitude_core::mechanics::Newton;
/// use magnitude_core::{symbol::write_symbols, Unit};
///
/// let mut label = String::new();
/// write_symbols(&mut label, &Newton::COMPOSITION).unwrap();
/// assert_eq!(label, " kg*m*s-2");
/// ```
pub fn write_symbols<W: Write + ?Sized>(out: &mut W, composition: &Composition) -> fmt::Result {
    for (i, factor) in composition.factors().iter().enumerate() {
        out.write_str(if i == 0 { " " } else { "*" })?;
        out.write_str(factor.symbol())?;
        if factor.exponent() != 1 {
            write!(out, "{}", factor.exponent())?;
        }
    }
    Ok(())
}

/// Writes ` <symbol>` when `symbol` is not empty, the synthesized label of `composition` otherwise.
pub fn write_label<W: Write + ?Sized>(
    out: &mut W,
    symbol: &str,
    composition: &Composition,
) -> fmt::Result {
    if symbol.is_empty() {
        write_symbols(out, composition)
    } else {
        out.write_char(' ')?;
        out.write_str(symbol)
    }
}

/// Synthesized label of `composition` as an owned string.
#[cfg(feature = "std")]
pub fn derived_magnitude_symbols(composition: &Composition) -> String {
    let mut label = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_symbols(&mut label, composition);
    label
}

/// Display adapter for the label of the unit `U`.
///
/// ```rust
/// use magnitude_core::mass::{Hectogram, Kilogram};
/// use magnitude_core::symbol::Label;
/// use magnitude_core::Prod;
///
/// assert_eq!(Label::<Kilogram>::new().to_string(), " kg");
/// assert_eq!(Label::<Prod<Kilogram, Hectogram>>::new().to_string(), " kg*hg");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Label<U: Unit>(PhantomData<U>);

impl<U: Unit> Label<U> {
    /// Label of `U`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit> Default for Label<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> Display for Label<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_label(f, U::SYMBOL, &U::COMPOSITION)
    }
}
