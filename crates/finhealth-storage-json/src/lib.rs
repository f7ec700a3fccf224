//! JSON file persistence for client profiles and standalone client snapshots.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use finhealth_domain::{ClientData, ClientProfile};
use tracing::{debug, info, warn};

mod error;

pub use error::StorageError;

const PROFILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const FALLBACK_SLUG: &str = "profile";

/// Persistence seam for named client profiles.
pub trait ProfileStore {
    fn save(&self, profile: &ClientProfile) -> Result<PathBuf, StorageError>;
    fn load(&self, name: &str) -> Result<ClientProfile, StorageError>;
    fn delete(&self, name: &str) -> Result<(), StorageError>;
    fn list(&self) -> Result<Vec<ProfileSummary>, StorageError>;
    fn exists(&self, name: &str) -> bool;
}

/// Listing row for a stored profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub slug: String,
    pub name: String,
    pub client_name: String,
    pub health_score: Option<u32>,
    pub saved_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub path: PathBuf,
}

/// One `<slug>.json` file per profile under a root directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    root: PathBuf,
}

impl JsonProfileStore {
    pub fn new(root: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), PROFILE_EXTENSION))
    }
}

impl ProfileStore for JsonProfileStore {
    fn save(&self, profile: &ClientProfile) -> Result<PathBuf, StorageError> {
        let path = self.profile_path(&profile.name);
        write_json(&path, &serde_json::to_string_pretty(profile)?)?;
        info!(profile = %profile.name, path = %path.display(), "profile saved");
        Ok(path)
    }

    fn load(&self, name: &str) -> Result<ClientProfile, StorageError> {
        let path = self.profile_path(name);
        if !path.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        let profile = serde_json::from_str(&raw)?;
        debug!(profile = %name, "profile loaded");
        Ok(profile)
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        let path = self.profile_path(name);
        if !path.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        info!(profile = %name, "profile deleted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<ProfileSummary>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut rows = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION)
            {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let profile: ClientProfile = match fs::read_to_string(&path)
                .map_err(StorageError::from)
                .and_then(|raw| serde_json::from_str(&raw).map_err(StorageError::from))
            {
                Ok(profile) => profile,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable profile");
                    continue;
                }
            };
            rows.push(ProfileSummary {
                slug: slug.to_string(),
                client_name: profile.data.name.clone(),
                health_score: profile.metrics.as_ref().map(|m| m.health_score),
                saved_date: profile.saved_date,
                last_modified: profile.last_modified,
                name: profile.name,
                path,
            });
        }
        rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(rows)
    }

    fn exists(&self, name: &str) -> bool {
        self.profile_path(name).is_file()
    }
}

/// Reads a bare client snapshot; absent fields take their defaults.
pub fn load_client_from_path(path: &Path) -> Result<ClientData, StorageError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_client_to_path(client: &ClientData, path: &Path) -> Result<(), StorageError> {
    write_json(path, &serde_json::to_string_pretty(client)?)
}

/// Lowercased name with every non `[a-z0-9]` character replaced by `_`.
pub fn canonical_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if slug.trim_matches('_').is_empty() {
        FALLBACK_SLUG.into()
    } else {
        slug
    }
}

fn write_json(path: &Path, contents: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
