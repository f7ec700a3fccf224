//! Shell state shared by every command handler.

use std::{io, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm};
use finhealth_config::{Config, ConfigError, ConfigManager};
use finhealth_core::{validate_client, Analysis, CoreError};
use finhealth_domain::{ClientData, ClientProfile};
use finhealth_storage_json::{JsonProfileStore, ProfileStore, StorageError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::commands;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::errors::{CliError, FinHealthError};
use crate::report::{ReportLine, ReportOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No client loaded. Use `new <name>`, `load <path>` or `open <profile>` first.")]
    NoClient,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    App(#[from] FinHealthError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::App(err.into())
    }
}

impl From<StorageError> for CommandError {
    fn from(err: StorageError) -> Self {
        CommandError::App(err.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::App(err.into())
    }
}

pub type CommandResult = Result<(), CommandError>;

/// The client being worked on, analysed after every change.
#[derive(Debug, Clone)]
pub struct Session {
    pub analysis: Analysis,
    /// Stored profile this session was opened from or last saved as.
    pub profile: Option<ClientProfile>,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub home: PathBuf,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store: JsonProfileStore,
    pub session: Option<Session>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, home: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(&home)?;
        let config = config_manager.load()?;
        let store = JsonProfileStore::new(config.resolve_profiles_root(&home))?;
        debug!(
            home = %home.display(),
            profiles = %store.root().display(),
            "shell context ready"
        );

        let mut context = Self {
            mode,
            home,
            registry: CommandRegistry::new(commands::all_definitions()),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            store,
            session: None,
            running: true,
        };
        context.apply_output_preferences();
        context.auto_open_last();
        Ok(context)
    }

    fn auto_open_last(&mut self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        let Some(name) = self.config.last_opened_profile.clone() else {
            return;
        };
        match self.store.load(&name) {
            Ok(profile) => {
                output::success(format!("Reopened last profile `{}`.", profile.name));
                self.start_session(profile.data.clone(), Some(profile));
            }
            Err(err) => warn!(profile = %name, error = %err, "could not reopen last profile"),
        }
    }

    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
            screen_reader_mode: self.config.screen_reader_mode,
            quiet_mode: self.config.quiet_mode,
        });
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        match &self.session {
            Some(session) if !session.analysis.client.name.is_empty() => {
                format!("finhealth ({})> ", session.analysis.client.name)
            }
            _ => "finhealth> ".into(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|def| def.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::hint(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    /// Analyses `client` and makes it the current session.
    pub(crate) fn start_session(&mut self, client: ClientData, profile: Option<ClientProfile>) {
        self.session = Some(Session {
            analysis: Analysis::run(client),
            profile,
        });
    }

    pub(crate) fn replace_client(&mut self, client: ClientData) -> CommandResult {
        validate_client(&client)?;
        let session = self.session.as_mut().ok_or(CommandError::NoClient)?;
        session.analysis = Analysis::run(client);
        Ok(())
    }

    pub(crate) fn session(&self) -> Result<&Session, CommandError> {
        self.session.as_ref().ok_or(CommandError::NoClient)
    }

    pub(crate) fn analysis(&self) -> Result<&Analysis, CommandError> {
        Ok(&self.session()?.analysis)
    }

    pub(crate) fn report_options(&self) -> ReportOptions {
        ReportOptions {
            percent_decimals: usize::from(self.config.percent_decimals),
            ..ReportOptions::default()
        }
    }

    pub(crate) fn print_lines(&self, lines: &[ReportLine]) {
        for line in lines {
            match line {
                ReportLine::Heading(title) => output::section(title),
                other => output::line(other),
            }
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn remember_profile(&mut self, name: Option<&str>) -> CommandResult {
        self.config.last_opened_profile = name.map(str::to_string);
        self.persist_config()
    }

    /// Points the store at the configured profiles directory.
    pub(crate) fn reload_store(&mut self) -> CommandResult {
        self.store = JsonProfileStore::new(self.config.resolve_profiles_root(&self.home))?;
        Ok(())
    }
}
