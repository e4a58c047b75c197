//! CLI commands for reports
//!
//! Each report prints to the terminal, or writes CSV when `--output` is given.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::info;

use crate::display::ReportStyle;
use crate::error::{ControlsError, ControlsResult};
use crate::export::{write_cash_flow_csv, write_evm_csv, write_s_curve_csv};
use crate::reports::{CashFlowReport, EvmReport, SCurveReport};
use crate::storage::load_ledger;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Earned value summary at a date
    Evm {
        /// Ledger file (.json, .yaml or .yml)
        ledger: PathBuf,

        /// Status date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,

        /// Planned value to use instead of the baseline schedule
        #[arg(long)]
        planned: Option<f64>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merged income and expense statement with running balance
    #[command(alias = "cashflow")]
    CashFlow {
        /// Ledger file (.json, .yaml or .yml)
        ledger: PathBuf,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cumulative planned, earned and actual values by month
    #[command(alias = "scurve")]
    SCurve {
        /// Ledger file (.json, .yaml or .yml)
        ledger: PathBuf,

        /// Last date to include (YYYY-MM-DD, default today)
        #[arg(long)]
        until: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(style: &ReportStyle, cmd: ReportCommands) -> ControlsResult<()> {
    match cmd {
        ReportCommands::Evm {
            ledger,
            as_of,
            planned,
            output,
        } => {
            let ledger = load_ledger(&ledger)?;
            let as_of = parse_date_or_today(as_of.as_deref(), "as-of")?;
            let report = EvmReport::generate(&ledger, as_of, planned, style.status_tolerance);

            match output {
                Some(path) => {
                    write_evm_csv(&report, create_output(&path)?)?;
                    report_written("EVM", &path);
                }
                None => println!("{}", report.format_terminal(style)),
            }
        }
        ReportCommands::CashFlow { ledger, output } => {
            let ledger = load_ledger(&ledger)?;
            let report = CashFlowReport::generate(&ledger);

            match output {
                Some(path) => {
                    write_cash_flow_csv(&report, create_output(&path)?)?;
                    report_written("Cash flow", &path);
                }
                None => println!("{}", report.format_terminal(style)),
            }
        }
        ReportCommands::SCurve {
            ledger,
            until,
            output,
        } => {
            let ledger = load_ledger(&ledger)?;
            let until = parse_date_or_today(until.as_deref(), "until")?;
            let report = SCurveReport::generate(&ledger, until);

            match output {
                Some(path) => {
                    write_s_curve_csv(&report, create_output(&path)?)?;
                    report_written("S-curve", &path);
                }
                None => println!("{}", report.format_terminal(style)),
            }
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` argument, defaulting to today's local date
pub fn parse_date_or_today(value: Option<&str>, flag: &str) -> ControlsResult<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            ControlsError::Validation(format!(
                "Invalid {} date format: {}. Use YYYY-MM-DD",
                flag, s
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Open a buffered writer for an output file
pub fn create_output(path: &Path) -> ControlsResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ControlsError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn report_written(kind: &str, path: &Path) {
    info!(path = %path.display(), "{} report written", kind);
    println!("{} report exported to: {}", kind, path.display());
}
