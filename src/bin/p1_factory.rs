// Pattern 1: Simple Factory
// Builds each known vehicle from its tag and prints its description.

use anyhow::{Context, Result};
use colored::Colorize;
use vehicle_patterns::logging;
use vehicle_patterns::p1_factory::{create, describe};

fn main() -> Result<()> {
    logging::init();

    println!("{}", "=== Simple Factory ===".bold());

    for tag in ["Bike", "Car"] {
        let vehicle = create(tag).with_context(|| format!("building {tag}"))?;
        println!("{}", describe(vehicle.as_ref()));
    }

    println!("\n{}", "=== Unknown Tag ===".bold());
    match create("Truck") {
        Ok(vehicle) => println!("unexpected: {}", describe(vehicle.as_ref())),
        Err(err) => println!("{} {err}", "rejected:".red()),
    }

    Ok(())
}
