//! JSON export of report bundles
//!
//! A bundle holds all three reports for one project with schema versioning,
//! so downstream dashboards can check compatibility before reading it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ControlsError, ControlsResult};
use crate::models::ProjectLedger;
use crate::reports::{CashFlowReport, EvmReport, SCurveReport};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every report for one project at one as-of date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub project: String,
    pub as_of: NaiveDate,
    pub evm: EvmReport,
    pub cash_flow: CashFlowReport,
    pub s_curve: SCurveReport,
}

impl ReportBundle {
    /// Generate all reports for a ledger
    pub fn generate(
        ledger: &ProjectLedger,
        as_of: NaiveDate,
        planned_override: Option<f64>,
        tolerance: f64,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            project: ledger.name.clone(),
            as_of,
            evm: EvmReport::generate(ledger, as_of, planned_override, tolerance),
            cash_flow: CashFlowReport::generate(ledger),
            s_curve: SCurveReport::generate(ledger, as_of),
        }
    }

    /// Check the bundle was written by a compatible schema
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}

/// Write a bundle as JSON
pub fn export_bundle_json<W: Write>(
    bundle: &ReportBundle,
    writer: &mut W,
    pretty: bool,
) -> ControlsResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, bundle)
    } else {
        serde_json::to_writer(writer, bundle)
    }
    .map_err(|e| ControlsError::Export(e.to_string()))?;

    Ok(())
}

/// Read a bundle back from JSON, checking its schema version
pub fn read_bundle_json(json_str: &str) -> ControlsResult<ReportBundle> {
    let bundle: ReportBundle =
        serde_json::from_str(json_str).map_err(|e| ControlsError::Input(e.to_string()))?;

    bundle.validate().map_err(ControlsError::Input)?;

    Ok(bundle)
}
