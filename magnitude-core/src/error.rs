//! Error types for runtime (dynamically tagged) quantities.
//!
//! Typed [`Quantity`](crate::Quantity) arithmetic reports these conditions at compile time; the
//! runtime layer ([`DynUnit`](crate::DynUnit), [`DynQuantity`](crate::DynQuantity)) returns them
//! instead.

use crate::dimension::Dimensions;

/// Result type for runtime quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for runtime quantity operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// The operands measure different kinds of quantity.
    #[error("Dimension mismatch: {left} is not compatible with {right}")]
    DimensionMismatch {
        /// Dimensions of the left operand (or the source unit).
        left: Dimensions,
        /// Dimensions of the right operand (or the target unit).
        right: Dimensions,
    },

    /// A derived unit was declared with no constituents, a zero exponent or too many constituents.
    #[error("Invalid unit composition: {0}")]
    InvalidComposition(String),

    /// A runtime division by a zero amount.
    #[error("Division by zero")]
    DivisionByZero,

    /// A unit name or symbol that is not in the catalogue.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// An amount that is not a finite number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
