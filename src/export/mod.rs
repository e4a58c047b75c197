//! Export module for sitecontrols
//!
//! - CSV: one file per report (spreadsheet-compatible)
//! - JSON: machine-readable report bundle
//! - YAML: human-readable report bundle

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{write_cash_flow_csv, write_evm_csv, write_s_curve_csv};
pub use json::{export_bundle_json, read_bundle_json, ReportBundle, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_bundle_yaml, read_bundle_yaml};

/// Bundle export format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON (machine-readable)
    #[default]
    Json,
    /// YAML (human-readable)
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
