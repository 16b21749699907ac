//! Scripted walk through the catalogue API.

use std::io::Write;
use std::sync::Arc;

use vending_logging::{ConsoleLogger, Logger, TimestampedLogger, TracingLogger};
use vending_machine::{Item, VendingMachine};

use crate::output::{OutputFormat, print_catalogue};

/// Run the demo against `machine`, printing the catalogue after every step.
///
/// Log lines go to the machine's sinks: stdout, plus the process `tracing`
/// subscriber. Catalogue snapshots go to `out`.
pub fn run(
    machine: &VendingMachine,
    out: &mut impl Write,
    format: OutputFormat,
) -> anyhow::Result<()> {
    machine.add_logger(Arc::new(ConsoleLogger::new()));
    machine.add_logger(Arc::new(TracingLogger::new()));

    machine.add_item(&Item::weapon("Knife", 50));
    machine.add_item(&Item::weapon("AK-74", 200));
    machine.add_item(&Item::weapon("AK-47", 100));
    let reindeer_meat = Item::food("Reindeer Meat", 250);
    machine.add_items(&reindeer_meat, 5)?;
    print_catalogue(out, format, "stocked", &machine.get_catalogue())?;

    machine.reduce_quantity(&reindeer_meat, 1)?;
    print_catalogue(out, format, "reduced by reference", &machine.get_catalogue())?;

    machine.reduce_quantity(&Item::food("Reindeer Meat", 250), 1)?;
    print_catalogue(out, format, "reduced by value", &machine.get_catalogue())?;

    let bought = machine.buy(&reindeer_meat, 200);
    writeln!(out, "Attempting to buy reindeer meat for 200, result: {bought}")?;
    print_catalogue(out, format, "buy for 200", &machine.get_catalogue())?;

    let bought = machine.buy(&reindeer_meat, 300);
    writeln!(out, "Attempting to buy reindeer meat for 300, result: {bought}")?;
    print_catalogue(out, format, "buy for 300", &machine.get_catalogue())?;

    machine.remove_item(&reindeer_meat);
    print_catalogue(out, format, "removed", &machine.get_catalogue())?;

    machine.clear_loggers();
    let custom: Arc<dyn Logger> =
        Arc::new(TimestampedLogger::with_prefix("WITH CUSTOM LOGGING! "));
    machine.add_logger(custom);
    machine.add_logger(Arc::new(TracingLogger::new()));
    machine.remove_item(&Item::weapon("AK-47", 100));
    print_catalogue(out, format, "final", &machine.get_catalogue())?;

    Ok(())
}
