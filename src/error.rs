//! Custom error types for sitecontrols
//!
//! The calculator functions in `services` are total and never fail. Errors
//! only arise around them: loading ledgers, reading settings and writing
//! exports.

use thiserror::Error;

/// The main error type for sitecontrols operations
#[derive(Error, Debug)]
pub enum ControlsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Ledger data that violates a model invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed command-line or ledger input (bad dates, unknown formats)
    #[error("Input error: {0}")]
    Input(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ControlsError {
    /// Create a validation error for a negative amount on a named record
    pub fn negative_amount(record: &str, index: usize) -> Self {
        Self::Validation(format!("{} #{} has a negative amount", record, index + 1))
    }

    /// Create a validation error for a percentage outside 0..=100
    pub fn percent_out_of_range(record: &str, index: usize, value: f64) -> Self {
        Self::Validation(format!(
            "{} #{} has percentage {} outside 0..=100",
            record,
            index + 1,
            value
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ControlsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ControlsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for ControlsError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for sitecontrols operations
pub type ControlsResult<T> = Result<T, ControlsError>;
