// Pattern 2: Abstract Factory
// Each client is stocked by one brand factory and manufactures its bundle.

use anyhow::Result;
use colored::Colorize;
use vehicle_patterns::logging;
use vehicle_patterns::p2_abstract_factory::{Brand, Client};

fn main() -> Result<()> {
    logging::init();

    println!("{}", "=== Abstract Factory ===".bold());

    for (i, brand) in Brand::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("{brand} factory:").cyan());

        let factory = brand.factory();
        let client = Client::new(factory.as_ref());
        for line in client.manufacture_vehicles() {
            println!("  {line}");
        }
    }

    Ok(())
}
