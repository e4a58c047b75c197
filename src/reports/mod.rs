//! Reports module for sitecontrols
//!
//! Earned value summary, cash-flow statement and S-curve, each generated
//! from a project ledger and renderable for the terminal.

pub mod cash_flow;
pub mod evm;
pub mod s_curve;

pub use cash_flow::CashFlowReport;
pub use evm::{CostBreakdownRow, EvmReport};
pub use s_curve::SCurveReport;
