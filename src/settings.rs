//! Persisted display preferences
//!
//! The display theme is the only thing that survives between runs. It lives
//! in a small RON file under the user's config directory.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const APP_DIR: &str = "wordle_game";
const SETTINGS_FILE: &str = "settings.ron";

/// Color scheme for the terminal front-ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Default settings location
    ///
    /// `$XDG_CONFIG_HOME/wordle_game/settings.ron`, else
    /// `$HOME/.config/wordle_game/settings.ron`. `None` when neither variable
    /// is set.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Read settings from `path`
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings, downgrading any failure to a warning
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!("{err}; using default settings");
            Self::default()
        })
    }

    /// Write settings to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if serialization or any file operation fails.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content).map_err(io_error)?;

        debug!(path = %path.display(), theme = ?self.theme, "Settings saved");
        Ok(())
    }
}
