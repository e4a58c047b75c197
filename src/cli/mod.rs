//! CLI command handlers
//!
//! Bridges the clap argument parsing with the calculators and reports.

pub mod calc;
pub mod export;
pub mod report;

pub use calc::{handle_calc_command, CalcCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};
