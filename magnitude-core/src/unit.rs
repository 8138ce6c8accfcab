//! Unit types and traits.

use crate::composition::Composition;
use crate::dimension::{BaseDimension, Dimensions};
use crate::ratio::Ratio;
use core::fmt::Debug;
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact factor from this unit to the *reference units* of its dimensions.
///   Example: grams are the mass reference (`Gram::RATIO == 1`), so `Kilogram::RATIO == 1000`.
///   For derived units it is the product of the constituents' ratios raised to their exponents
///   (`KilometersPerHour::RATIO == 1000 / 3600`).
///
/// * `DIMENSION` is the unit's [`Dimensions`] vector.
///
/// * `COMPOSITION` lists the base units the unit is made of; it drives label synthesis.
///
/// * `SYMBOL` is the printable symbol of a named unit (`"kg"`, `"N"`). Composed units
///   ([`Prod`], [`Per`]) leave it empty and are labelled from their composition instead.
///
/// Units are usually declared with `#[derive(Unit)]`.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `DIMENSION == COMPOSITION.dimensions()` and `RATIO == COMPOSITION.ratio()`.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Exact unit-to-reference conversion factor.
    const RATIO: Ratio;

    /// Dimension vector of the unit.
    const DIMENSION: Dimensions;

    /// Constituent base units.
    const COMPOSITION: Composition;

    /// Printable symbol, empty for composed units.
    const SYMBOL: &'static str;
}

/// A unit measuring exactly one base dimension with exponent one (gram, metre, second, …).
///
/// Only base units can be constituents of a derived unit's composition.
pub trait BaseUnit: Unit {
    /// The measured base dimension.
    const BASE: BaseDimension;
}

/// Compile-time rescaling factor between two units of the same dimension.
///
/// Evaluating [`Rescale::FACTOR`] for units with different [`Dimensions`] fails the build with a
/// "dimension mismatch" error; this is how adding metres to kilograms is rejected.
pub struct Rescale<Src, Dst>(PhantomData<(Src, Dst)>);

impl<Src: Unit, Dst: Unit> Rescale<Src, Dst> {
    /// `ratio(Src) / ratio(Dst)`, reduced.
    pub const FACTOR: Ratio = {
        assert!(
            Src::DIMENSION.same_as(&Dst::DIMENSION),
            "dimension mismatch: the units measure different kinds of quantity"
        );
        Src::RATIO.div(Dst::RATIO)
    };
}

/// Unit representing the product of two other units.
///
/// `Prod<A, B>` corresponds to `A * B`; its ratio is the product of both ratios and its composition
/// merges both constituent lists (repeated base units sum their exponents).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    const DIMENSION: Dimensions = A::DIMENSION.mul(B::DIMENSION);
    const COMPOSITION: Composition = A::COMPOSITION.product(B::COMPOSITION);
    const SYMBOL: &'static str = "";
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`. It is generic over any numerator and denominator, so a
/// quotient of quantities converts to any named unit of the same dimension:
///
/// ```rust
/// use magnitude_core::length::Kilometers;
/// use magnitude_core::time::Hours;
/// use magnitude_core::velocity::{KilometersPerHour, MetersPerSecond};
///
/// let v = Kilometers::new(36.0) / Hours::new(1.0);
/// assert!((v.to::<MetersPerSecond>().amount() - 10.0).abs() < 1e-12);
/// assert!((v.to::<KilometersPerHour>().amount() - 36.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    const DIMENSION: Dimensions = N::DIMENSION.div(D::DIMENSION);
    const COMPOSITION: Composition = N::COMPOSITION.quotient(D::COMPOSITION);
    const SYMBOL: &'static str = "";
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` has ratio one, an empty composition and an empty symbol. Any composed unit whose
/// dimensions cancel (e.g. `Per<Meter, Kilometer>`) converts to it with `to::<Unitless>()`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: Ratio = Ratio::ONE;
    const DIMENSION: Dimensions = Dimensions::DIMENSIONLESS;
    const COMPOSITION: Composition = Composition::DIMENSIONLESS;
    const SYMBOL: &'static str = "";
}
