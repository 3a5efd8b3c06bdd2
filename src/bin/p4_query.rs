// Pattern 4: Deferred Query
// Filters the default ages above the threshold and prints them ascending.

use anyhow::Result;
use colored::Colorize;
use vehicle_patterns::logging;
use vehicle_patterns::p4_query::QueryConfig;

fn main() -> Result<()> {
    logging::init();

    let config = QueryConfig::default();
    let query = config.query();
    tracing::debug!(values = ?config.values, threshold = query.threshold(), "running query");

    println!(
        "{}",
        format!("=== Ages greater than {} ===", query.threshold()).bold()
    );
    for age in &query {
        println!("{age}");
    }

    Ok(())
}
