//! Time units.
//!
//! The reference unit for this dimension is [`Second`] (`Second::RATIO == 1`). Civil units use the
//! conventional mapping `1 d = 86_400 s` (leap seconds ignored).
//!
//! ```rust
//! use magnitude_core::time::{Day, Hour, Hours, Minute, Second};
//!
//! let day = Hours::new(24.0).to::<Day>();
//! assert_eq!(day.amount(), 1.0);
//! assert_eq!(day.to::<Minute>().amount(), 1440.0);
//! assert_eq!(day.to::<Second>().amount(), 86_400.0);
//! assert_eq!(day.to::<Hour>().amount(), 24.0);
//! ```

use crate::{Quantity, Unit};

/// Seconds per day under the civil mapping used by this module.
pub const SECONDS_PER_DAY: i128 = 86_400;

/// Millisecond (`1 ms = 1/1000 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = 1 / 1000)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// One millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = 60)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = 60 * 60)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Day (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Time, ratio = SECONDS_PER_DAY)]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// One day.
pub const DAY: Days = Days::new(1.0);

/// Week (`7 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", dimension = Time, ratio = 7 * SECONDS_PER_DAY)]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks = Quantity<Week>;
/// One week.
pub const WEEK: Weeks = Weeks::new(1.0);

crate::impl_unit_conversions!(Second, Millisecond, Minute, Hour, Day, Week);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ratio;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ratios_are_exact() {
        assert_eq!(Millisecond::RATIO, Ratio::new(1, 1000));
        assert_eq!(Minute::RATIO, Ratio::integer(60));
        assert_eq!(Hour::RATIO, Ratio::integer(3600));
        assert_eq!(Day::RATIO, Ratio::integer(86_400));
        assert_eq!(Week::RATIO, Ratio::integer(604_800));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn everything_makes_one_day() {
        assert_eq!(Seconds::new(86_400.0).to::<Day>().amount(), 1.0);
        assert_eq!(Minutes::new(1440.0).to::<Day>().amount(), 1.0);
        assert_eq!(Hours::new(24.0).to::<Day>().amount(), 1.0);
    }

    #[test]
    fn one_day_in_smaller_units() {
        assert_eq!(DAY.to::<Hour>().amount(), 24.0);
        assert_eq!(DAY.to::<Minute>().amount(), 1440.0);
        assert_eq!(DAY.to::<Second>().amount(), 86_400.0);
    }

    #[test]
    fn integer_days() {
        let s = Quantity::<Day, i64>::new(2).to::<Second>();
        assert_eq!(s.amount(), 172_800);
        let d = Quantity::<Hour, i64>::new(47).to::<Day>();
        assert_eq!(d.amount(), 1);
    }

    #[test]
    fn week_and_millisecond() {
        assert_eq!(WEEK.to::<Day>().amount(), 7.0);
        assert_abs_diff_eq!(MILLISEC.to::<Second>().amount(), 1e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(Seconds::new(1.5).to::<Millisecond>().amount(), 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn from_conversions() {
        let min: Minutes = HOUR.into();
        assert_eq!(min.amount(), 60.0);
        let h: Hours = Quantity::<Second>::new(7200.0).into();
        assert_eq!(h.amount(), 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_s_d(s in -1e9..1e9f64) {
            let back = Seconds::new(s).to::<Day>().to::<Second>();
            prop_assert!((back.amount() - s).abs() <= 1e-9 * s.abs().max(1.0));
        }

        #[test]
        fn prop_hours_minutes(h in 0.0..1e6f64) {
            let min = Hours::new(h).to::<Minute>();
            prop_assert!((min.amount() - h * 60.0).abs() <= 1e-9 * h.max(1.0));
        }
    }
}
