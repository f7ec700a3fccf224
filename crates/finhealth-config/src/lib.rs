//! finhealth-config
//!
//! Persistent user preferences for the finhealth shell.
//! Owns the Config data structure plus disk persistence and backup helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{ConfigBackupInfo, ConfigManager, CONFIG_BACKUP_SCHEMA_VERSION};
pub use model::Config;
