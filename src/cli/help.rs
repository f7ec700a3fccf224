use crate::cli::output;
use crate::cli::registry::{CommandDefinition, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for definition in registry.iter() {
        output::line(format!("  {:<10} {}", definition.name, definition.description));
    }
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(definition: &CommandDefinition) {
    output::section(format!("Help: {}", definition.name));
    output::line(format!("  {}", definition.description));
    output::line(format!("  Usage: {}", definition.usage));
}
