//! Ledger loading
//!
//! Project ledgers arrive as JSON or YAML documents exported by the project
//! data services. This layer only reads them; it owns no store.

pub mod file_io;

pub use file_io::{read_json_required, read_yaml_required};

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ControlsError, ControlsResult};
use crate::models::ProjectLedger;

/// Document formats a ledger can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Json,
    Yaml,
}

impl LedgerFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ControlsResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ControlsError::Input(format!(
                "Cannot tell ledger format of {}; use a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }
}

/// Read and validate a project ledger
pub fn load_ledger(path: impl AsRef<Path>) -> ControlsResult<ProjectLedger> {
    let path = path.as_ref();
    let format = LedgerFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "reading ledger");

    let ledger: ProjectLedger = match format {
        LedgerFormat::Json => read_json_required(path)?,
        LedgerFormat::Yaml => read_yaml_required(path)?,
    };

    ledger.validate()?;

    info!(
        project = %ledger.name,
        costs = ledger.costs.len(),
        income = ledger.income.len(),
        progress = ledger.progress.len(),
        baseline = ledger.baseline.len(),
        "ledger loaded"
    );

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const YAML_LEDGER: &str = "\
name: Tower A
budget:
  total_budget: 100000000
costs:
  - date: 2025-01-10
    amount: 1250000.50
    category: material
    description: Rebar
income:
  - date: 2025-01-05
    amount: \"5,000,000\"
    description: Advance
progress:
  - as_of: 2025-01-31
    percent_complete: 12.5
baseline:
  - date: 2025-01-01
    planned_percent: 0
  - date: 2025-12-31
    planned_percent: 100
";

    #[test]
    fn test_format_from_path() {
        assert_eq!(LedgerFormat::from_path(&PathBuf::from("a.json")).unwrap(), LedgerFormat::Json);
        assert_eq!(LedgerFormat::from_path(&PathBuf::from("a.YML")).unwrap(), LedgerFormat::Yaml);
        assert!(LedgerFormat::from_path(&PathBuf::from("a.txt")).is_err());
        assert!(LedgerFormat::from_path(&PathBuf::from("ledger")).is_err());
    }

    #[test]
    fn test_load_yaml_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tower.yaml");
        std::fs::write(&path, YAML_LEDGER).unwrap();

        let ledger = load_ledger(&path).unwrap();
        assert_eq!(ledger.name, "Tower A");
        assert_eq!(ledger.budget.total_budget, Money::from_units(100_000_000));
        assert_eq!(ledger.costs[0].amount.cents(), 125_000_050);
        assert_eq!(ledger.income[0].amount, Money::from_units(5_000_000));
        assert_eq!(ledger.baseline.len(), 2);
    }

    #[test]
    fn test_load_json_round_trip_of_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let ledger: ProjectLedger = serde_yaml::from_str(YAML_LEDGER).unwrap();
        let path = temp_dir.path().join("tower.json");
        std::fs::write(&path, serde_json::to_string(&ledger).unwrap()).unwrap();

        let loaded = load_ledger(&path).unwrap();
        assert_eq!(loaded.costs[0].amount, ledger.costs[0].amount);
        assert_eq!(loaded.progress, ledger.progress);
    }

    #[test]
    fn test_invalid_ledger_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(
            &path,
            "name: Bad\nprogress:\n  - as_of: 2025-01-31\n    percent_complete: 130\n",
        )
        .unwrap();

        let err = load_ledger(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_amount_strings_rejected() {
        let temp_dir = TempDir::new().unwrap();

        for amount in ["1.5é", "1.-5"] {
            let path = temp_dir.path().join("amount.yaml");
            std::fs::write(
                &path,
                format!("name: Odd\nbudget:\n  total_budget: \"{}\"\n", amount),
            )
            .unwrap();

            let err = load_ledger(&path).unwrap_err();
            assert!(matches!(err, ControlsError::Yaml(_)), "{}: {}", amount, err);
            assert!(err.to_string().contains("Invalid money format"));
        }
    }

    #[test]
    fn test_overflowing_totals_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.json");
        std::fs::write(
            &path,
            r#"{"name": "Big", "income": [
                {"date": "2025-01-01", "amount": 60000000000000000},
                {"date": "2025-01-02", "amount": 60000000000000000}
            ]}"#,
        )
        .unwrap();

        assert!(load_ledger(&path).unwrap_err().is_validation());
    }
}
