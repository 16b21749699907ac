use vending_console::{OutputFormat, demo};
use vending_machine::VendingMachine;

fn main() -> anyhow::Result<()> {
    vending_observability::init();

    let format = OutputFormat::from_env().unwrap_or_else(|err| {
        tracing::warn!("{err}; printing catalogue as text");
        OutputFormat::Text
    });

    let machine = VendingMachine::new();
    tracing::info!(machine = %machine.id(), ?format, "starting vending machine demo");

    let stdout = std::io::stdout();
    demo::run(&machine, &mut stdout.lock(), format)?;

    tracing::info!(machine = %machine.id(), entries = machine.len(), "demo finished");
    Ok(())
}
