// Pattern 3: Singleton
// Two lookups of the global instance; creation is logged once.

use anyhow::{ensure, Result};
use colored::Colorize;
use vehicle_patterns::logging;
use vehicle_patterns::p3_singleton::Messenger;

fn main() -> Result<()> {
    logging::init();

    println!("{}", "=== Singleton ===".bold());

    let instance1 = Messenger::instance();
    println!("{}", instance1.display_message("Instance 1: Singleton Pattern in Action!"));

    let instance2 = Messenger::instance();
    println!("{}", instance2.display_message("Instance 2: Singleton Pattern in Action!"));

    ensure!(
        Messenger::is_same(instance1, instance2),
        "Instances are different, Singleton failed."
    );
    println!("{}", "Both instances are the same, Singleton works!".green());
    println!("  creations: {}", Messenger::creation_count());

    Ok(())
}
