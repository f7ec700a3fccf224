use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Config, ConfigError};

pub const CONFIG_BACKUP_SCHEMA_VERSION: u32 = 1;
const BACKUP_PREFIX: &str = "config_";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// On-disk shape of a backup file; the timestamp and note travel with the settings.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigBackup {
    schema_version: u32,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    config: Config,
}

/// Listing entry for a stored configuration backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBackupInfo {
    pub file_name: String,
    pub created_at: DateTime<Utc>,
    pub note: Option<String>,
}

/// Loads, saves and snapshots [`Config`] under an application home directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, backups_dir: PathBuf) -> Self {
        Self {
            config_path,
            backups_dir,
        }
    }

    /// Lays out `<home>/config/config.json` and `<home>/config/backups/`.
    pub fn with_base_dir(home: &Path) -> Result<Self, ConfigError> {
        let config_dir = home.join("config");
        let backups_dir = config_dir.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self::new(config_dir.join("config.json"), backups_dir))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Missing file yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_replacing(&self.config_path, &json)?;
        debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }

    /// Writes a timestamped snapshot and returns its file name.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String, ConfigError> {
        let created_at = Utc::now();
        let note = note.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        let mut file_name = format!(
            "{}{}",
            BACKUP_PREFIX,
            created_at.format(BACKUP_TIMESTAMP_FORMAT)
        );
        if let Some(slug) = note.as_deref().and_then(slugify) {
            file_name.push('_');
            file_name.push_str(&slug);
        }
        file_name.push('.');
        file_name.push_str(BACKUP_EXTENSION);

        let envelope = ConfigBackup {
            schema_version: CONFIG_BACKUP_SCHEMA_VERSION,
            created_at,
            note,
            config: config.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        write_replacing(&self.backups_dir.join(&file_name), &json)?;
        info!(backup = %file_name, "config backup written");
        Ok(file_name)
    }

    /// Reads a snapshot back; the caller decides whether to save it as current.
    pub fn restore(&self, file_name: &str) -> Result<Config, ConfigError> {
        let path = self.backups_dir.join(file_name);
        if !path.is_file() {
            return Err(ConfigError::BackupNotFound(file_name.to_string()));
        }
        let envelope = read_backup(&path)?;
        if envelope.schema_version > CONFIG_BACKUP_SCHEMA_VERSION {
            return Err(ConfigError::Serde(format!(
                "unsupported backup schema version {}",
                envelope.schema_version
            )));
        }
        info!(backup = %file_name, "config backup restored");
        Ok(envelope.config)
    }

    /// Newest first. Files that are not readable backups are skipped.
    pub fn list_backups(&self) -> Result<Vec<ConfigBackupInfo>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match read_backup(&path) {
                Ok(envelope) => backups.push(ConfigBackupInfo {
                    file_name: file_name.to_string(),
                    created_at: envelope.created_at,
                    note: envelope.note,
                }),
                Err(err) => debug!(file = %file_name, error = %err, "skipping unreadable backup"),
            }
        }
        backups.sort_by_key(|info| Reverse((info.created_at, info.file_name.clone())));
        Ok(backups)
    }
}

fn read_backup(path: &Path) -> Result<ConfigBackup, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn slugify(note: &str) -> Option<String> {
    let slug = note
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    (!slug.is_empty()).then_some(slug)
}

/// Writes beside the target, then renames over it.
fn write_replacing(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
