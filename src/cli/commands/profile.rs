use finhealth_core::Analysis;
use finhealth_storage_json::ProfileStore;

use super::{joined, usage_error};
use crate::cli::context::{CommandError, CommandResult, Session, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandDefinition;
use crate::errors::FinHealthError;

const OPEN_USAGE: &str = "open <name>";
const DELETE_USAGE: &str = "delete <name>";
const LISTED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "save",
            "Save the current client as a profile",
            "save [name]",
            cmd_save,
        ),
        CommandDefinition::new("open", "Open a saved profile", OPEN_USAGE, cmd_open),
        CommandDefinition::new("profiles", "List saved profiles", "profiles", cmd_profiles),
        CommandDefinition::new(
            "delete",
            "Delete a saved profile",
            DELETE_USAGE,
            cmd_delete,
        ),
    ]
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let session = context.session()?;
    let name = if args.is_empty() {
        session
            .profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_else(|| session.analysis.client.name.clone())
    } else {
        args.join(" ")
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(usage_error("save <name>"));
    }

    let analysis = session.analysis.clone();
    let target = context.store.profile_path(&name);
    let existing = session
        .profile
        .as_ref()
        .filter(|profile| context.store.profile_path(&profile.name) == target)
        .cloned();

    let profile = match existing {
        Some(mut profile) => {
            profile.name = name.clone();
            profile.revise(analysis.client.clone());
            profile.with_analysis(analysis.metrics.clone(), analysis.risk.clone())
        }
        None => {
            if context.store.exists(&name)
                && !context.confirm(&format!("Overwrite existing profile `{}`?", name))?
            {
                output::info("Save cancelled.");
                return Ok(());
            }
            analysis.clone().into_profile(name.clone())
        }
    };

    let path = context.store.save(&profile)?;
    context.session = Some(Session {
        analysis,
        profile: Some(profile),
    });
    context.remember_profile(Some(&name))?;
    output::success(format!("Profile `{}` saved to {}.", name, path.display()));
    Ok(())
}

fn cmd_open(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined(args, OPEN_USAGE)?;
    let profile = context.store.load(&name)?;
    let analysis = Analysis::of_profile(&profile);
    output::success(format!(
        "Opened profile `{}`: health score {}/100, overall risk {}/100.",
        profile.name, analysis.metrics.health_score, analysis.risk.overall_risk_score
    ));
    let stored_name = profile.name.clone();
    context.session = Some(Session {
        analysis,
        profile: Some(profile),
    });
    context.remember_profile(Some(&stored_name))
}

fn cmd_profiles(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows = context.store.list()?;
    output::section("Saved profiles");
    if rows.is_empty() {
        output::info("No saved profiles.");
        return Ok(());
    }
    for row in rows {
        let score = row
            .health_score
            .map(|score| format!("{}/100", score))
            .unwrap_or_else(|| "-".into());
        output::line(format!(
            "  {:<24} {:<20} score {:<8} modified {}",
            row.name,
            row.client_name,
            score,
            row.last_modified.format(LISTED_DATE_FORMAT)
        ));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined(args, DELETE_USAGE)?;
    if !context.store.exists(&name) {
        return Err(CommandError::App(FinHealthError::ProfileNotFound(name)));
    }
    if !context.confirm(&format!("Delete profile `{}`?", name))? {
        output::info("Delete cancelled.");
        return Ok(());
    }
    context.store.delete(&name)?;

    let deleted_path = context.store.profile_path(&name);
    let refers_to_deleted =
        |profile_name: &str| context.store.profile_path(profile_name) == deleted_path;
    let was_open = context
        .session
        .as_ref()
        .and_then(|session| session.profile.as_ref())
        .is_some_and(|profile| refers_to_deleted(&profile.name));
    let was_last = context
        .config
        .last_opened_profile
        .as_deref()
        .is_some_and(refers_to_deleted);

    if was_open {
        if let Some(session) = context.session.as_mut() {
            session.profile = None;
        }
    }
    if was_last {
        context.remember_profile(None)?;
    }
    output::success(format!("Profile `{}` deleted.", name));
    Ok(())
}
