//! Path management for sitecontrols
//!
//! ## Path Resolution Order
//!
//! 1. `SITECTL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sitecontrols` or `~/.config/sitecontrols`
//! 3. Windows: `%APPDATA%\sitecontrols`

use std::path::PathBuf;

use crate::error::ControlsError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SITECTL_DATA_DIR";

/// Manages all paths used by sitecontrols
#[derive(Debug, Clone)]
pub struct ControlsPaths {
    base_dir: PathBuf,
}

impl ControlsPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ControlsError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ControlsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default directory for report exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), ControlsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ControlsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ControlsError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ControlsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ControlsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("sitecontrols"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ControlsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ControlsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sitecontrols"))
}
