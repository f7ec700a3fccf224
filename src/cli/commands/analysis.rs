use std::io;

use super::usage_error;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandDefinition;
use crate::report::{render_report, risk_lines, score_lines, snapshot_lines};

const METRICS_USAGE: &str = "metrics [--itemize]";
const REPORT_USAGE: &str = "report [--itemize] [--brief] [--json]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "metrics",
            "Show the financial snapshot",
            METRICS_USAGE,
            cmd_metrics,
        ),
        CommandDefinition::new(
            "score",
            "Show the health score and its breakdown",
            "score",
            cmd_score,
        ),
        CommandDefinition::new("risk", "Show the risk assessment", "risk", cmd_risk),
        CommandDefinition::new(
            "report",
            "Show the full analysis report",
            REPORT_USAGE,
            cmd_report,
        ),
    ]
}

fn cmd_metrics(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut options = context.report_options();
    for arg in args {
        match *arg {
            "--itemize" => options.itemize = true,
            _ => return Err(usage_error(METRICS_USAGE)),
        }
    }
    let lines = snapshot_lines(context.analysis()?, &options);
    context.print_lines(&lines);
    Ok(())
}

fn cmd_score(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let lines = score_lines(context.analysis()?);
    context.print_lines(&lines);
    Ok(())
}

fn cmd_risk(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let lines = risk_lines(context.analysis()?, &context.report_options());
    context.print_lines(&lines);
    Ok(())
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut options = context.report_options();
    let mut as_json = false;
    for arg in args {
        match *arg {
            "--itemize" => options.itemize = true,
            "--brief" => options.include_recommendations = false,
            "--json" => as_json = true,
            _ => return Err(usage_error(REPORT_USAGE)),
        }
    }
    if as_json {
        let json = serde_json::to_string_pretty(context.analysis()?).map_err(io::Error::from)?;
        output::line(json);
        return Ok(());
    }
    let lines = render_report(context.analysis()?, &options);
    context.print_lines(&lines);
    Ok(())
}
