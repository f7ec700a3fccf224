use finhealth_config::ConfigError;
use finhealth_core::CoreError;
use finhealth_storage_json::StorageError;
use thiserror::Error;

/// Failures surfaced by the application layer around the engines.
#[derive(Debug, Error)]
pub enum FinHealthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

impl From<CoreError> for FinHealthError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => FinHealthError::InvalidInput(message),
        }
    }
}

impl From<StorageError> for FinHealthError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(name) => FinHealthError::ProfileNotFound(name),
            other => FinHealthError::StorageError(other.to_string()),
        }
    }
}

impl From<ConfigError> for FinHealthError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. } => {
                FinHealthError::InvalidInput(err.to_string())
            }
            other => FinHealthError::ConfigError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for FinHealthError {
    fn from(err: std::io::Error) -> Self {
        FinHealthError::StorageError(err.to_string())
    }
}

/// Fatal errors that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinHealthError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        CliError::Core(err.into())
    }
}
