//! Serializing quantities to JSON and reading them from TOML configuration.
//!
//! ```bash
//! cargo run --example serialization --features serde
//! ```

use magnitude::{DynQuantity, Hectograms, Kilograms, KilometersPerHour, Quantity};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct Payload {
    // Bare amount: the unit is the field's type.
    mass: Kilograms,
    // `{ "value", "unit" }`: the unit is checked on input.
    #[serde(with = "magnitude::serde_with_unit")]
    max_speed: Quantity<KilometersPerHour>,
    // `{ "amount", "unit" }`: any unit, resolved at runtime.
    reading: DynQuantity,
}

fn main() {
    let payload = Payload {
        mass: Kilograms::new(3000.0) + Hectograms::new(72.0),
        max_speed: Quantity::new(130.0),
        reading: "9.81 m*s-2".parse().unwrap(),
    };
    let json = serde_json::to_string_pretty(&payload).unwrap();
    println!("{}", json);

    let restored: Payload = serde_json::from_str(&json).unwrap();
    println!("{:?}", restored);

    let config = r#"
        mass = 1450.0
        max_speed = { value = 180.0, unit = "km/h" }
        reading = { amount = 3.5, unit = "kilowatt" }
    "#;
    let from_toml: Payload = toml::from_str(config).unwrap();
    println!("mass = {}, max_speed = {}, reading = {}", from_toml.mass, from_toml.max_speed, from_toml.reading);

    let wrong_unit = r#"
        mass = 1450.0
        max_speed = { value = 50.0, unit = "m/s" }
        reading = { amount = 1.0, unit = "s" }
    "#;
    if let Err(err) = toml::from_str::<Payload>(wrong_unit) {
        println!("rejected: {}", err);
    }
}
