//! sitecontrols - construction project cost controls
//!
//! Earned value management (EVM), budget utilization and cash-flow
//! statements for construction projects, computed from a project ledger.
//!
//! # Architecture
//!
//! - `models`: ledger data (money, costs, income, progress, baseline)
//! - `services`: pure calculators (EVM, utilization, cash flow, S-curve)
//! - `reports`: report generation and terminal formatting
//! - `export`: CSV, JSON and YAML output
//! - `storage`: ledger loading
//! - `config`: paths and user settings
//! - `cli`: command handlers for the `sitectl` binary
//!
//! # Example
//!
//! ```
//! use sitecontrols::services::{compute_budget_utilization, compute_evm};
//!
//! let evm = compute_evm(100_000_000.0, 40_000_000.0, 50_000_000.0, 35_000_000.0);
//! assert_eq!(evm.cpi, 0.875);
//! assert_eq!(compute_budget_utilization(100_000_000.0, 40_000_000.0), 40.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ControlsError, ControlsResult};
