//! Runner settings
//!
//! Stored as JSON next to the binary. Physics constants are fixed and not
//! part of the settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings file used when `SOCCER_POOL_SETTINGS` is not set
pub const DEFAULT_SETTINGS_FILE: &str = "soccer_pool.json";

/// Environment variable overriding the settings path
pub const SETTINGS_ENV: &str = "SOCCER_POOL_SETTINGS";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = derive from the clock)
    pub seed: Option<u64>,
    /// Stop after this many ticks (None = run until quit)
    pub max_ticks: Option<u64>,
    /// Pace ticks to wall-clock time
    pub realtime: bool,
    /// Log a JSON snapshot every N ticks (0 = never)
    pub snapshot_interval: u32,
    /// Feed a scripted drag gesture into the game
    pub demo_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: Some(60 * 60),
            realtime: true,
            snapshot_interval: 60,
            demo_input: true,
        }
    }
}

impl Settings {
    /// Settings path from the environment, or the default file name
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
