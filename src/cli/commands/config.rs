use finhealth_config::Config;

use super::usage_error;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandDefinition;

const CONFIG_USAGE: &str =
    "config [show|set <key> <value>|backup [note]|backups|restore <file>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View and manage preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show(context);
    };
    match action.to_lowercase().as_str() {
        "show" => show(context),
        "set" => match rest {
            [key, value @ ..] if !value.is_empty() => set(context, key, &value.join(" ")),
            _ => Err(usage_error("config set <key> <value>")),
        },
        "backup" => {
            let note = (!rest.is_empty()).then(|| rest.join(" "));
            let name = context
                .config_manager
                .backup(&context.config, note.as_deref())?;
            output::success(format!("Configuration backed up as {}.", name));
            Ok(())
        }
        "backups" => list_backups(context),
        "restore" => match rest {
            [file] => restore(context, file),
            _ => Err(usage_error("config restore <file>")),
        },
        _ => Err(usage_error(CONFIG_USAGE)),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::line(format!("  {:<22} {}", key, value));
    }
    output::line(format!(
        "  {:<22} {}",
        "config_file",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    apply(context, updated)?;
    output::success(format!("{} updated.", key));
    Ok(())
}

fn list_backups(context: &ShellContext) -> CommandResult {
    let backups = context.config_manager.list_backups()?;
    output::section("Configuration backups");
    if backups.is_empty() {
        output::info("No configuration backups.");
        return Ok(());
    }
    for backup in backups {
        let note = backup.note.unwrap_or_default();
        output::line(format!(
            "  {:<44} {} {}",
            backup.file_name,
            backup.created_at.format("%Y-%m-%d %H:%M:%S"),
            note
        ));
    }
    Ok(())
}

fn restore(context: &mut ShellContext, file: &str) -> CommandResult {
    if !context.confirm(&format!("Replace current preferences with {}?", file))? {
        output::info("Restore cancelled.");
        return Ok(());
    }
    let restored = context.config_manager.restore(file)?;
    apply(context, restored)?;
    output::success(format!("Configuration restored from {}.", file));
    Ok(())
}

/// Saves `config` and refreshes everything derived from it.
fn apply(context: &mut ShellContext, config: Config) -> CommandResult {
    let root_changed = config.profiles_root != context.config.profiles_root;
    context.config = config;
    context.persist_config()?;
    context.apply_output_preferences();
    if root_changed {
        context.reload_store()?;
        output::info(format!("Profiles directory: {}", context.store.root().display()));
    }
    Ok(())
}
