use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const MAX_PERCENT_DECIMALS: u8 = 4;

/// User preferences for the shell and the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub screen_reader_mode: bool,
    #[serde(default)]
    pub quiet_mode: bool,
    #[serde(default = "Config::default_percent_decimals")]
    pub percent_decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_profile: Option<String>,
    /// Directory holding saved profiles. Relative to the app home when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_color_enabled: Self::default_ui_color_enabled(),
            screen_reader_mode: false,
            quiet_mode: false,
            percent_decimals: Self::default_percent_decimals(),
            last_opened_profile: None,
            profiles_root: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "ui_color_enabled",
        "screen_reader_mode",
        "quiet_mode",
        "percent_decimals",
        "profiles_root",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_percent_decimals() -> u8 {
        1
    }

    pub fn resolve_profiles_root(&self, app_home: &Path) -> PathBuf {
        match &self.profiles_root {
            Some(path) => path.clone(),
            None => app_home.join("profiles"),
        }
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("screen_reader_mode", self.screen_reader_mode.to_string()),
            ("quiet_mode", self.quiet_mode.to_string()),
            ("percent_decimals", self.percent_decimals.to_string()),
            (
                "last_opened_profile",
                self.last_opened_profile
                    .clone()
                    .unwrap_or_else(|| "(none)".into()),
            ),
            (
                "profiles_root",
                self.profiles_root
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(default)".into()),
            ),
        ]
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "screen_reader_mode" => self.screen_reader_mode = parse_flag(key, value)?,
            "quiet_mode" => self.quiet_mode = parse_flag(key, value)?,
            "percent_decimals" => {
                let decimals: u8 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(key, value, "expected a whole number"))?;
                if decimals > MAX_PERCENT_DECIMALS {
                    return Err(invalid(
                        key,
                        value,
                        &format!("must be between 0 and {}", MAX_PERCENT_DECIMALS),
                    ));
                }
                self.percent_decimals = decimals;
            }
            "profiles_root" => {
                let trimmed = value.trim();
                self.profiles_root = match trimmed {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value, "expected on/off")),
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
