pub mod analysis;
pub mod client;
pub mod config;
pub mod profile;
pub mod system;

use crate::cli::context::CommandError;
use crate::cli::registry::CommandDefinition;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(client::definitions());
    commands.extend(analysis::definitions());
    commands.extend(profile::definitions());
    commands.extend(config::definitions());
    commands
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", usage))
}

/// Joins the remaining arguments into one value, rejecting an empty one.
pub(crate) fn joined(args: &[&str], usage: &str) -> Result<String, CommandError> {
    let value = args.join(" ");
    if value.trim().is_empty() {
        return Err(usage_error(usage));
    }
    Ok(value.trim().to_string())
}
