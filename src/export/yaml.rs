//! YAML export of report bundles

use std::io::Write;

use crate::error::{ControlsError, ControlsResult};
use crate::export::json::ReportBundle;

/// Write a bundle as YAML with a short comment header
pub fn export_bundle_yaml<W: Write>(
    bundle: &ReportBundle,
    writer: &mut W,
) -> ControlsResult<()> {
    let io_err = |e: std::io::Error| ControlsError::Export(e.to_string());

    writeln!(writer, "# sitecontrols report bundle").map_err(io_err)?;
    writeln!(writer, "# Project: {}", comment_safe(&bundle.project)).map_err(io_err)?;
    writeln!(writer, "# As of: {}", bundle.as_of).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", bundle.generated_at).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, bundle).map_err(|e| ControlsError::Export(e.to_string()))?;

    Ok(())
}

/// Flatten line breaks so text stays inside a single `#` comment line
fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() || c == '\u{2028}' || c == '\u{2029}' {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Read a bundle back from YAML, checking its schema version
pub fn read_bundle_yaml(yaml_str: &str) -> ControlsResult<ReportBundle> {
    let bundle: ReportBundle =
        serde_yaml::from_str(yaml_str).map_err(|e| ControlsError::Input(e.to_string()))?;

    bundle.validate().map_err(ControlsError::Input)?;

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostCategory, CostEntry, Money, ProjectLedger};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_and_read_back() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let mut ledger = ProjectLedger::new("Pump Station", Money::from_units(80_000));
        ledger.costs.push(CostEntry::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Money::from_units(8_000),
            CostCategory::Equipment,
        ));

        let bundle = ReportBundle::generate(&ledger, as_of, None, 0.05);
        let mut out = Vec::new();
        export_bundle_yaml(&bundle, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# sitecontrols report bundle\n# Project: Pump Station\n"));
        assert!(text.contains("schema_version: 1.0.0"));

        let read = read_bundle_yaml(&text).unwrap();
        assert_eq!(read.as_of, as_of);
        assert_eq!(read.evm.result.ac, 8_000.0);
        assert_eq!(read.evm.breakdown[0].category, CostCategory::Equipment);
    }

    #[test]
    fn test_multiline_project_name_stays_in_header_comment() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let name = "Pump Station\nschema_version: 9\r\nLot 4";
        let ledger = ProjectLedger::new(name, Money::from_units(10));

        let bundle = ReportBundle::generate(&ledger, as_of, None, 0.05);
        let mut out = Vec::new();
        export_bundle_yaml(&bundle, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("# Project: Pump Station schema_version: 9  Lot 4\n"));

        let read = read_bundle_yaml(&text).unwrap();
        assert_eq!(read.project, ledger.name);
    }
}
