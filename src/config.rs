//! User preferences — theme and font scale — and their persistence.
//!
//! Preferences are stored as a small JSON object at
//! `<config dir>/settings.json`, where the directory is (first match wins)
//! `--config-dir`, `$ZYNC_CONFIG_DIR`, the platform config dir + `zync`, or
//! `./.zync`.  Loading never fails: anything unreadable falls back to the
//! defaults.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::palette::{FontScale, Theme};

const FILE_NAME: &str = "settings.json";
const DIR_ENV: &str = "ZYNC_CONFIG_DIR";

// ───────────────────────────────────────── preferences ───────

/// The two persisted user preferences.  Missing fields default individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    #[serde(rename = "font_size")]
    pub font_scale: FontScale,
}

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot create settings directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot replace {path}: {source}")]
    Rename { path: PathBuf, source: io::Error },
    #[error("cannot encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How a load went.  Only used for logging; callers get [`Preferences`]
/// either way.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Preferences),
    Missing,
    Corrupt(String),
    Unreadable(String),
}

impl LoadOutcome {
    pub fn into_prefs(self) -> Preferences {
        match self {
            Self::Loaded(prefs) => prefs,
            Self::Missing | Self::Corrupt(_) | Self::Unreadable(_) => Preferences::default(),
        }
    }
}

// ───────────────────────────────────────── store ─────────────

/// Sole reader and writer of the settings file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store rooted at `dir` (the file name is fixed).
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(FILE_NAME),
        }
    }

    /// Store at the conventional location, honouring an explicit override.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        Self::in_dir(override_dir.unwrap_or_else(default_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted preferences, substituting defaults on any failure.
    pub fn load(&self) -> Preferences {
        let outcome = self.load_outcome();
        match &outcome {
            LoadOutcome::Loaded(prefs) => {
                tracing::debug!(path = %self.path.display(), ?prefs, "loaded preferences")
            }
            LoadOutcome::Missing => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults")
            }
            LoadOutcome::Corrupt(details) => tracing::warn!(
                path = %self.path.display(),
                details = %details,
                "settings file is corrupt, using defaults"
            ),
            LoadOutcome::Unreadable(details) => tracing::warn!(
                path = %self.path.display(),
                details = %details,
                "settings file is unreadable, using defaults"
            ),
        }
        outcome.into_prefs()
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return LoadOutcome::Missing,
            // Invalid UTF-8 is bad content, not a bad disk.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return LoadOutcome::Corrupt(e.to_string())
            }
            Err(e) => return LoadOutcome::Unreadable(e.to_string()),
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => LoadOutcome::Loaded(prefs),
            Err(e) => LoadOutcome::Corrupt(e.to_string()),
        }
    }

    /// Replace the settings file: temp file → fsync → rename.
    pub fn save(&self, prefs: &Preferences) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        write_synced(&tmp, json.as_bytes()).map_err(|source| SettingsError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            SettingsError::Rename {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), ?prefs, "saved preferences");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `$ZYNC_CONFIG_DIR`, else `<platform config dir>/zync`, else `./.zync`.
fn default_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .map(|d| d.join("zync"))
        .unwrap_or_else(|| PathBuf::from(".zync"))
}
