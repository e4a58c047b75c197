//! User settings for sitecontrols
//!
//! Presentation preferences only. Nothing here feeds the calculator; the
//! status tolerance is applied when reports classify CPI/SPI readings.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ControlsPaths;
use crate::error::ControlsError;
use crate::export::ExportFormat;

/// User settings for sitecontrols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Band around 1.0 within which an index counts as on target
    #[serde(default = "default_status_tolerance")]
    pub status_tolerance: f64,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_status_tolerance() -> f64 {
    0.05
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Check that a strftime string contains no unknown specifiers
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            status_tolerance: default_status_tolerance(),
            default_export_format: ExportFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &ControlsPaths) -> Result<Self, ControlsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ControlsError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ControlsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Not persisted until the caller asks
            Ok(Settings::default())
        }
    }

    /// Reject settings that would break report rendering
    pub fn validate(&self) -> Result<(), ControlsError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(ControlsError::Config(format!(
                "Invalid date format '{}' in settings",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ControlsPaths) -> Result<(), ControlsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ControlsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ControlsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
