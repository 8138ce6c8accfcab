//! Conversions inside a family of units and between named and composed units.

use magnitude::velocity::Velocity;
use magnitude::{
    Day, Days, Hour, Hours, Joule, Kilometer, MetersPerSecond, Meters, Minute, Minutes, Newton,
    Second, Seconds,
};

fn main() {
    for t in [Seconds::new(86_400.0).to::<Day>(), Minutes::new(1_440.0).to(), Hours::new(24.0).to()] {
        println!("{}", t);
    }

    let day = Days::new(1.0);
    println!("{} = {} = {} = {}", day, day.to::<Hour>(), day.to::<Minute>(), day.to::<Second>());

    // Family conversions are also available through `From`.
    let m: Meters = magnitude::Kilometers::new(1.5).into();
    println!("1.5 km = {}", m);

    let v: Velocity<Kilometer, Hour> = Velocity::new(90.0);
    println!("{} = {}", v, v.to::<MetersPerSecond>());

    let mass = magnitude::Kilograms::new(2.0);
    let acceleration = Meters::new(9.81) / (Seconds::new(1.0) * Seconds::new(1.0));
    let force = mass * acceleration;
    println!("{} = {}", force, force.to::<Newton>());

    let work = force.to::<Newton>() * Meters::new(10.0);
    println!("{} = {}", work, work.to::<Joule>());

    let per_kilo = magnitude::Grams::new(250.0) / magnitude::Kilograms::new(1.0);
    println!("{} = {} (dimensionless)", per_kilo, per_kilo.to::<magnitude::Unitless>());
}
