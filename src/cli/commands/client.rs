use std::path::Path;

use finhealth_core::validate_client;
use finhealth_domain::ClientData;
use finhealth_storage_json::{load_client_from_path, save_client_to_path};
use tracing::info;

use super::{joined, usage_error};
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::fields::{apply_field, display_value, SETTABLE_FIELDS};
use crate::cli::output;
use crate::cli::registry::CommandDefinition;

const NEW_USAGE: &str = "new <name>";
const LOAD_USAGE: &str = "load <path>";
const SET_USAGE: &str = "set <field> <value>";
const EXPORT_USAGE: &str = "export <path>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("new", "Start a blank client", NEW_USAGE, cmd_new),
        CommandDefinition::new(
            "load",
            "Load client data from a JSON file",
            LOAD_USAGE,
            cmd_load,
        ),
        CommandDefinition::new(
            "set",
            "Update a field of the current client",
            SET_USAGE,
            cmd_set,
        ),
        CommandDefinition::new(
            "fields",
            "List settable fields and their values",
            "fields",
            cmd_fields,
        ),
        CommandDefinition::new(
            "export",
            "Write the current client data as JSON",
            EXPORT_USAGE,
            cmd_export,
        ),
    ]
}

fn cmd_new(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined(args, NEW_USAGE)?;
    context.start_session(ClientData::new(name.clone()), None);
    output::success(format!("New client `{}` created.", name));
    output::hint("Use `fields` to see what can be set.");
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(usage_error(LOAD_USAGE));
    };
    let client = load_client_from_path(Path::new(path))?;
    validate_client(&client)?;
    info!(path = %path, "client data loaded");
    let name = client.name.clone();
    context.start_session(client, None);
    output::success(format!("Loaded client `{}` from {}.", name, path));
    print_headline(context)
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((key, rest)) = args.split_first() else {
        return Err(usage_error(SET_USAGE));
    };
    if rest.is_empty() {
        return Err(usage_error(SET_USAGE));
    }
    let mut client = context.analysis()?.client.clone();
    let field = apply_field(&mut client, key, &rest.join(" "))
        .map_err(CommandError::InvalidArguments)?;
    context.replace_client(client)?;
    output::success(format!("Updated {}.", field));
    print_headline(context)
}

fn cmd_fields(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let client = &context.analysis()?.client;
    output::section("Client fields");
    for field in SETTABLE_FIELDS {
        output::line(format!(
            "  {:<28} {:<16} ({})",
            field.key,
            display_value(client, field),
            field.slot.value_hint()
        ));
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(usage_error(EXPORT_USAGE));
    };
    save_client_to_path(&context.analysis()?.client, Path::new(path))?;
    output::success(format!("Client data written to {}.", path));
    Ok(())
}

/// One-line health and risk summary after the client changes.
fn print_headline(context: &ShellContext) -> CommandResult {
    let analysis = context.analysis()?;
    output::info(format!(
        "Health score {}/100, overall risk {}/100.",
        analysis.metrics.health_score, analysis.risk.overall_risk_score
    ));
    Ok(())
}
