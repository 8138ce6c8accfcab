//! Macros for unit families.

/// Generates `From` implementations between every pair of the listed units, for any amount type.
///
/// All units must have the same dimensions; the conversion is [`Quantity::to`](crate::Quantity::to).
///
/// ```rust
/// use magnitude_core::length::{Kilometers, Meters};
///
/// let m: Meters = Kilometers::new(2.0).into();
/// assert_eq!(m.amount(), 2000.0);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Scalar> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<T: $crate::Scalar> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
