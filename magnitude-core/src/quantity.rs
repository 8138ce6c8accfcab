//! Quantity type and its implementations.

use crate::dimension::Dimensions;
use crate::ratio::Ratio;
use crate::scalar::{Promote, Scalar};
use crate::symbol::Label;
use crate::unit::{Per, Prod, Rescale, Unit};
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount tagged with a unit.
///
/// `Quantity<U, T>` wraps a numeric amount of type `T` (default `f64`) together with phantom type
/// information about its unit `U`. The unit fixes the dimensions and the scale of the amount at
/// compile time, so mixing kinds of quantity is rejected by the compiler and conversions between
/// units of one kind cost a single multiplication.
///
/// # Examples
///
/// ```rust
/// use magnitude_core::mass::{Hectograms, Kilogram, Kilograms};
///
/// let total = Kilograms::new(3000.0) + Hectograms::new(72.0);
/// assert!((total.amount() - 3007.2).abs() < 1e-9);
/// assert_eq!(total.to::<Kilogram>().to_string(), total.to_string());
/// ```
///
/// Quantities of different kinds cannot be added:
///
/// ```compile_fail
/// use magnitude_core::length::Meters;
/// use magnitude_core::mass::Kilograms;
///
/// let _ = Kilograms::new(1.0) + Meters::new(2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, T: Scalar = f64> {
    amount: T,
    _unit: PhantomData<U>,
}

impl<U: Unit, T: Scalar> Quantity<U, T> {
    /// Creates a new quantity with the given amount.
    ///
    /// ```rust
    /// use magnitude_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.amount(), 3.0);
    /// ```
    #[inline]
    pub const fn new(amount: T) -> Self {
        Self {
            amount,
            _unit: PhantomData,
        }
    }

    /// Returns the raw amount, expressed in `U`.
    ///
    /// ```rust
    /// use magnitude_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.amount(), 2.5);
    /// ```
    #[inline]
    pub fn amount(self) -> T {
        self.amount
    }

    /// Dimension vector of `U`.
    #[inline]
    pub const fn dimension(&self) -> Dimensions {
        U::DIMENSION
    }

    /// Ratio of `U` to the reference units of its dimensions.
    #[inline]
    pub const fn ratio(&self) -> Ratio {
        U::RATIO
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use magnitude_core::velocity::MetersPerSecond;
    /// use magnitude_core::Quantity;
    ///
    /// let v = Quantity::<MetersPerSecond>::new(-10.0);
    /// assert_eq!(v.abs().amount(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.amount.magnitude())
    }

    /// Converts this quantity to another unit of the same dimensions.
    ///
    /// The amount is multiplied by the exact factor `ratio(U) / ratio(V)`. Converting to a unit of
    /// different dimensions does not compile.
    ///
    /// ```rust
    /// use magnitude_core::time::{Day, Hours};
    ///
    /// let d = Hours::new(24.0).to::<Day>();
    /// assert_eq!(d.amount(), 1.0);
    /// ```
    ///
    /// ```compile_fail
    /// use magnitude_core::length::Meter;
    /// use magnitude_core::time::Seconds;
    ///
    /// let _ = Seconds::new(1.0).to::<Meter>();
    /// ```
    #[inline]
    pub fn to<V: Unit>(self) -> Quantity<V, T> {
        Quantity::new(self.amount.rescale(Rescale::<U, V>::FACTOR))
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use magnitude_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).amount(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.amount < self.amount {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.amount > self.amount {
            other
        } else {
            self
        }
    }
}

impl<U: Unit, T: Scalar> Default for Quantity<U, T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<U: Unit, T: Scalar> PartialEq for Quantity<U, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<U: Unit, T: Scalar> PartialOrd for Quantity<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.amount.partial_cmp(&other.amount)
    }
}

/// Formats as `<amount><label>`: `3007.2 kg`, `216000 kg*hg`, `10 m*s-1`.
///
/// Formatting options (precision, width) apply to the amount.
impl<U: Unit, T: Scalar + Display> Display for Quantity<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.amount, f)?;
        Display::fmt(&Label::<U>::new(), f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊕ Quantity
// ─────────────────────────────────────────────────────────────────────────────

/// The right operand is rescaled into the left operand's unit, which the sum keeps.
impl<U, V, T, S> Add<Quantity<V, S>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    S: Scalar,
    T: Promote<S>,
{
    type Output = Quantity<U, T::Promoted>;

    #[inline]
    fn add(self, rhs: Quantity<V, S>) -> Self::Output {
        let rhs = T::promote_rhs(rhs.amount).rescale(Rescale::<V, U>::FACTOR);
        Quantity::new(self.amount.promote_lhs() + rhs)
    }
}

/// The right operand is rescaled into the left operand's unit, which the difference keeps.
impl<U, V, T, S> Sub<Quantity<V, S>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    S: Scalar,
    T: Promote<S>,
{
    type Output = Quantity<U, T::Promoted>;

    #[inline]
    fn sub(self, rhs: Quantity<V, S>) -> Self::Output {
        let rhs = T::promote_rhs(rhs.amount).rescale(Rescale::<V, U>::FACTOR);
        Quantity::new(self.amount.promote_lhs() - rhs)
    }
}

impl<U: Unit, V: Unit, T: Scalar> AddAssign<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, T>) {
        self.amount = self.amount + rhs.to::<U>().amount;
    }
}

impl<U: Unit, V: Unit, T: Scalar> SubAssign<Quantity<V, T>> for Quantity<U, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, T>) {
        self.amount = self.amount - rhs.to::<U>().amount;
    }
}

/// Amounts are multiplied as-is; the product unit composes both units.
impl<U, V, T, S> Mul<Quantity<V, S>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    S: Scalar,
    T: Promote<S>,
{
    type Output = Quantity<Prod<U, V>, T::Promoted>;

    #[inline]
    fn mul(self, rhs: Quantity<V, S>) -> Self::Output {
        Quantity::new(self.amount.promote_lhs() * T::promote_rhs(rhs.amount))
    }
}

/// Amounts are divided as-is; the quotient unit composes both units.
///
/// A zero divisor follows the amount type: infinities or NaN for floats, a panic for integers.
impl<U, V, T, S> Div<Quantity<V, S>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    S: Scalar,
    T: Promote<S>,
{
    type Output = Quantity<Per<U, V>, T::Promoted>;

    #[inline]
    fn div(self, rhs: Quantity<V, S>) -> Self::Output {
        Quantity::new(self.amount.promote_lhs() / T::promote_rhs(rhs.amount))
    }
}

impl<U: Unit, T: Scalar + Neg<Output = T>> Neg for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl<U: Unit, T: Scalar> Sum for Quantity<U, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| Self::new(acc.amount + q.amount))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊕ scalar
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! scalar_ops {
    ($($t:ty),+) => {
        $(
            impl<U: Unit> Mul<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.amount * rhs)
                }
            }

            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Quantity<U, $t> {
                    rhs * self
                }
            }

            impl<U: Unit> Div<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::new(self.amount / rhs)
                }
            }

            impl<U: Unit> MulAssign<$t> for Quantity<U, $t> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.amount = self.amount * rhs;
                }
            }

            impl<U: Unit> DivAssign<$t> for Quantity<U, $t> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.amount = self.amount / rhs;
                }
            }

            impl<U: Unit> From<$t> for Quantity<U, $t> {
                #[inline]
                fn from(amount: $t) -> Self {
                    Self::new(amount)
                }
            }
        )+
    };
}

scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Scalar + Serialize> Serialize for Quantity<U, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.amount.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Scalar + Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = T::deserialize(deserializer)?;
        Ok(Quantity::new(amount))
    }
}

/// Serde helper module for serializing quantities with their unit label.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit in serialized data, e.g.
/// in configuration files.
///
/// # Examples
///
/// ```rust
/// use magnitude_core::mass::Kilograms;
/// use magnitude_core::velocity::KilometersPerHour;
/// use magnitude_core::Quantity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Vehicle {
///     #[serde(with = "magnitude_core::serde_with_unit")]
///     max_speed: Quantity<KilometersPerHour>, // {"value": 180.0, "unit": "km/h"}
///
///     mass: Kilograms, // 1450.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U, T>` as a struct with `value` and `unit` fields.
    ///
    /// The unit is the label of `U` without its leading space (`"kg"`, `"kg*hg"`).
    pub fn serialize<U, T, S>(quantity: &Quantity<U, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        T: Scalar + Serialize,
        S: Serializer,
    {
        let label = Label::<U>::new().to_string();
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.amount())?;
        state.serialize_field("unit", label.trim_start())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, T>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` that does not match the label of `U` is rejected.
    pub fn deserialize<'de, U, T, D>(deserializer: D) -> Result<Quantity<U, T>, D::Error>
    where
        U: Unit,
        T: Scalar + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, T>(PhantomData<(U, T)>);

        impl<'de, U: Unit, T: Scalar + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, T> {
            type Value = Quantity<U, T>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Quantity<U, T>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = Label::<U>::new().to_string();
                    if found.trim() != expected.trim_start() {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected.trim_start(),
                            found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
