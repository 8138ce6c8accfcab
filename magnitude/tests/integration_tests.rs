//! Integration-level tests for the `magnitude` facade crate.

use magnitude::symbol::Label;
use magnitude::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Mass arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mass_addition_keeps_left_unit() {
    let kg = Kilograms::new(3000.0);
    let hg = Hectograms::new(72.0);

    let sum = kg + hg;
    assert_abs_diff_eq!(sum.amount(), 3007.2, epsilon = 1e-9);
    assert_eq!(sum.to_string(), "3007.2 kg");

    let sum = hg + kg;
    assert_abs_diff_eq!(sum.amount(), 30072.0, epsilon = 1e-9);
    assert_eq!(sum.to_string(), "30072 hg");
}

#[test]
fn mass_subtraction_with_integer_right_operand() {
    let kg: Quantity<Kilogram, f64> = Quantity::new(3000.0);
    let hg: Quantity<Hectogram, i32> = Quantity::new(72);
    let diff = kg - hg;
    assert_abs_diff_eq!(diff.amount(), 2992.8, epsilon = 1e-9);
    assert_eq!(diff.to_string(), "2992.8 kg");
}

#[test]
fn mass_product_is_mass_squared() {
    let kg: Quantity<Kilogram, f64> = Quantity::new(3000.0);
    let hg: Quantity<Hectogram, i32> = Quantity::new(72);
    let product = kg * hg;

    assert_eq!(product.dimension(), Dimensions::MASS.pow(2));
    assert_eq!(product.to_string(), "216000 kg*hg");

    let in_kg_g = product.to::<Prod<Kilogram, Gram>>();
    assert_abs_diff_eq!(in_kg_g.amount(), 21_600_000.0, epsilon = 1e-6);
    assert_eq!(in_kg_g.to_string(), "21600000 kg*g");
}

#[test]
fn mass_quotient_is_dimensionless() {
    let kg: Quantity<Kilogram, f64> = Quantity::new(3000.0);
    let hg: Quantity<Hectogram, i32> = Quantity::new(72);
    let quotient = kg / hg;

    assert!(quotient.dimension().is_dimensionless());
    assert_relative_eq!(quotient.amount(), 41.666_666_666, max_relative = 1e-9);
    assert_eq!(Label::<Per<Kilogram, Hectogram>>::new().to_string(), " kg*hg-1");

    let per_gram = quotient.to::<Per<Kilogram, Gram>>();
    assert_relative_eq!(per_gram.amount(), 0.416_666_666, max_relative = 1e-8);
    assert_relative_eq!(quotient.to::<Unitless>().amount(), 416.666_666_66, max_relative = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Velocity arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn velocity_addition_and_subtraction() {
    let c = Quantity::<MetersPerSecond>::new(300_000.0);
    let v = Quantity::<KilometersPerHour>::new(200.0);

    let sum = c + v;
    assert_abs_diff_eq!(sum.amount(), 300_055.555_555, epsilon = 1e-3);
    assert!(sum.to_string().ends_with(" m/s"));

    let diff = v - c;
    assert!(diff.to_string().ends_with(" km/h"));
    assert_abs_diff_eq!(diff.to::<MetersPerSecond>().amount(), -299_944.444_444, epsilon = 1e-3);
}

#[test]
fn velocity_conversion_round_trip() {
    let c = Quantity::<MetersPerSecond>::new(300_000.0);
    let kmh = c.to::<KilometersPerHour>();
    assert_abs_diff_eq!(kmh.amount(), 1_080_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(kmh.to::<MetersPerSecond>().amount(), 300_000.0, epsilon = 1e-6);
}

#[test]
fn distance_over_time_is_a_velocity() {
    let v = Kilometers::new(1_000.0) / Seconds::new(100.0);
    assert_eq!(v.dimension(), Dimensions::VELOCITY);
    assert_abs_diff_eq!(v.to::<MetersPerSecond>().amount(), 10_000.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Time
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn one_day_in_every_time_unit() {
    assert_abs_diff_eq!(Seconds::new(86_400.0).to::<Day>().amount(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Minutes::new(1_440.0).to::<Day>().amount(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Hours::new(24.0).to::<Day>().amount(), 1.0, epsilon = 1e-12);

    let day = Days::new(1.0);
    assert_abs_diff_eq!(day.to::<Hour>().amount(), 24.0, epsilon = 1e-12);
    assert_abs_diff_eq!(day.to::<Minute>().amount(), 1_440.0, epsilon = 1e-9);
    assert_abs_diff_eq!(day.to::<Second>().amount(), 86_400.0, epsilon = 1e-9);
}

#[test]
fn integer_time_conversions_are_exact() {
    let day: Quantity<Day, i64> = Quantity::new(1);
    assert_eq!(day.to::<Second>().amount(), 86_400);
    assert_eq!(day.to::<Millisecond>().amount(), 86_400_000);
    let week: Quantity<Week, u32> = Quantity::new(2);
    assert_eq!(week.to::<Day>().amount(), 14);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived magnitudes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn newton_second_law() {
    let force = Kilograms::new(2.0) * (Meters::new(3.0) / (Seconds::new(1.0) * Seconds::new(1.0)));
    assert_eq!(force.dimension(), Dimensions::FORCE);
    assert_abs_diff_eq!(force.to::<Newton>().amount(), 6.0, epsilon = 1e-12);
}

#[test]
fn power_and_energy() {
    let energy = Watts::new(1_500.0) * Hours::new(2.0);
    assert_eq!(energy.dimension(), Dimensions::ENERGY);
    assert_abs_diff_eq!(energy.to::<Kilojoule>().amount(), 10_800.0, epsilon = 1e-6);
    assert_abs_diff_eq!(Kilowatts::new(1.5).to::<Watt>().amount(), 1_500.0, epsilon = 1e-9);
}

#[test]
fn electric_units() {
    let charge = Amperes::new(2.0) * Minutes::new(1.0);
    assert_abs_diff_eq!(charge.to::<Coulomb>().amount(), 120.0, epsilon = 1e-9);
    let power = Quantity::<Volt>::new(230.0) * Amperes::new(10.0);
    assert_abs_diff_eq!(power.to::<Watt>().amount(), 2_300.0, epsilon = 1e-9);
}

#[test]
fn frequency_units() {
    let f = Quantity::<PerMinute>::new(120.0);
    assert_abs_diff_eq!(f.to::<Hertz>().amount(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Quantity::<Kilohertz>::new(1.0).to::<Hertz>().amount(), 1_000.0, epsilon = 1e-9);
}

#[test]
fn synthesized_labels() {
    assert_eq!(Label::<Prod<Newton, Meter>>::new().to_string(), " kg*m2*s-2");
    assert_eq!(symbol::derived_magnitude_symbols(&Newton::COMPOSITION), " kg*m*s-2");
    assert_eq!(symbol::derived_magnitude_symbols(&Composition::DIMENSIONLESS), "");
    assert_eq!(Joules::new(1.0).to_string(), "1 J");
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime layer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn runtime_dimension_mismatch() {
    let mass: DynQuantity = "3000 kg".parse().unwrap();
    let length: DynQuantity = "2 m".parse().unwrap();
    assert_eq!(
        mass.try_add(&length),
        Err(QuantityError::DimensionMismatch {
            left: Dimensions::MASS,
            right: Dimensions::LENGTH,
        })
    );
}

#[test]
fn runtime_matches_typed() {
    let typed = Kilograms::new(3000.0) + Hectograms::new(72.0);
    let dynamic = DynQuantity::from(Kilograms::new(3000.0))
        .try_add(&DynQuantity::from(Hectograms::new(72.0)))
        .unwrap();
    assert_eq!(dynamic.to_string(), typed.to_string());
    assert_eq!(dynamic.to_typed::<Kilogram>().unwrap(), typed);
}

#[test]
fn catalogue_covers_every_dimension() {
    for base in BaseDimension::ALL {
        assert!(UnitId::ALL
            .iter()
            .any(|id| id.is_base() && id.dimension() == Dimensions::base(base)));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_mass_round_trip(v in -1e9..1e9f64) {
        let back = Kilograms::new(v).to::<Milligram>().to::<Tonne>().to::<Kilogram>();
        prop_assert!((back.amount() - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn prop_time_round_trip(v in -1e9..1e9f64) {
        let back = Seconds::new(v).to::<Week>().to::<Minute>().to::<Second>();
        prop_assert!((back.amount() - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn prop_addition_is_left_unit_sum(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let left = Kilometers::new(a) + Meters::new(b);
        let right = Meters::new(b) + Kilometers::new(a);
        prop_assert!((left.to::<Meter>().amount() - right.amount()).abs() <= 1e-6);
    }
}
