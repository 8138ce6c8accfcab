//! Quantities whose units are only known at runtime.
//!
//! ```bash
//! cargo run --example dynamic -- "3000 kg" "72 hg"
//! ```

use magnitude::{DynQuantity, QuantityResult, UnitId};

fn combine(left: &DynQuantity, right: &DynQuantity) -> QuantityResult<()> {
    println!("{} * {} = {}", left, right, left.try_mul(right)?);
    println!("{} / {} = {}", left, right, left.try_div(right)?);
    println!("{} + {} = {}", left, right, left.try_add(right)?);
    println!("{} - {} = {}", left, right, left.try_sub(right)?);
    Ok(())
}

fn main() {
    let mut args = std::env::args().skip(1);
    let left = args.next().unwrap_or_else(|| "300000 m/s".to_string());
    let right = args.next().unwrap_or_else(|| "200 km/h".to_string());

    let parsed = left
        .parse::<DynQuantity>()
        .and_then(|l| right.parse::<DynQuantity>().map(|r| (l, r)));
    let (left, right) = match parsed {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = combine(&left, &right) {
        eprintln!("{}", err);
    }

    println!("\nCatalogue:");
    for id in UnitId::ALL {
        println!("  {:<6} {:<20} {}", id.symbol(), id.name(), id.dimension());
    }
}
