//! ConfigStore - Local configuration lookup

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{error, info};

use crate::domain::settings::Settings;
use crate::error::{Error, Result};

/// Name of the optional settings file in the config directory
pub const SETTINGS_FILE: &str = "neurodex.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "neurodex", "neurodex").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/neurodex/`
/// - **macOS**: `~/Library/Application Support/org.neurodex.neurodex/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\neurodex\neurodex\config\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get or create the directory holding log files
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Read settings from `path`; a missing file yields defaults
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let value = fs::read_to_string(path)?;
    Settings::from_toml(&value)
}

/// Load settings from the config directory, falling back to defaults on any error
pub fn load_settings() -> Settings {
    let path = match config_dir() {
        Ok(dir) => dir.join(SETTINGS_FILE),
        Err(e) => {
            error!(error = %e, "No config directory, using default settings");
            return Settings::default();
        }
    };

    load_settings_or_default(&path)
}

/// Read settings from `path`, logging and falling back to defaults on any error
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings_from(path) {
        Ok(settings) => {
            info!(path = ?path, ?settings, "Settings loaded");
            settings
        }
        Err(e) => {
            error!(error = %e, path = ?path, "Failed to load settings, using defaults");
            Settings::default()
        }
    }
}
