//! Persistence of the live configuration as a single JSON snapshot.
//!
//! There is no versioning: a missing or unreadable file simply means "no saved
//! state" and the editor starts from defaults.

use std::fs;
use std::path::{Path, PathBuf};

use titlecraft_core::TitleConfig;
use tracing::{debug, error, info, warn};

const STATE_FILE_NAME: &str = "state.json";

/// Directory containing the running executable. Falls back to current directory if unavailable.
fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// `state.json` in the OS config directory, or next to the executable.
pub(crate) fn default_state_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "TitleCraft")
        .map(|d| d.config_dir().join(STATE_FILE_NAME))
        .unwrap_or_else(|| exe_directory().join(STATE_FILE_NAME))
}

/// Reads and writes the saved configuration snapshot.
#[derive(Debug, Clone)]
pub(crate) struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn open_default() -> Self {
        Self::new(default_state_path())
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved snapshot. Missing keys take their defaults.
    pub(crate) fn load(&self) -> Option<TitleConfig> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved state at {}", self.path.display());
                return None;
            }
            Err(e) => {
                error!("Failed to read saved state {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<TitleConfig>(&json) {
            Ok(config) => {
                info!("Loaded saved state from {}", self.path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring corrupt saved state {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Persist `config`, replacing any previous snapshot.
    pub(crate) fn save(&self, config: &TitleConfig) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create state directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(config) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, &json) {
                    error!("Failed to write saved state: {e}");
                } else {
                    debug!("Saved state");
                }
            }
            Err(e) => error!("Failed to serialize state: {e}"),
        }
    }
}
