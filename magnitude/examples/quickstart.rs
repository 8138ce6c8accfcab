//! Minimal end-to-end example: mass and velocity sums printed with their labels.

use magnitude::{Hectogram, Hectograms, Kilogram, Kilograms, KilometersPerHour, MetersPerSecond, Quantity};

fn main() {
    let kg = Kilograms::new(3000.0);
    let hg = Hectograms::new(72.0);

    // The left operand's unit wins.
    println!("{} + {} = {}", kg, hg, kg + hg);
    println!("{} + {} = {}", hg, kg, hg + kg);

    let heavy: Quantity<Kilogram> = Quantity::new(3000.0);
    let light: Quantity<Hectogram, i32> = Quantity::new(72);
    println!("{} - {} = {}", heavy, light, heavy - light);
    println!("{} * {} = {}", heavy, light, heavy * light);
    println!("{} / {} = {}", heavy, light, heavy / light);

    let c = Quantity::<MetersPerSecond>::new(300_000.0);
    let v = Quantity::<KilometersPerHour>::new(200.0);
    println!("{} + {} = {}", c, v, c + v);
    println!("{} - {} = {}", v, c, v - c);
    println!("{} = {}", c, c.to::<KilometersPerHour>());
}
