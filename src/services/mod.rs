//! Calculation layer for sitecontrols
//!
//! Pure functions over plain inputs. Nothing in here performs I/O, logs, or
//! reads ambient state; callers pass every figure explicitly.

pub mod baseline;
pub mod cash_flow;
pub mod evm;
pub mod s_curve;
pub mod utilization;

pub use baseline::{
    actual_cost_to, earned_value_at, evm_for_ledger, percent_complete_at, planned_percent_at,
    planned_value_at, EvmInputs,
};
pub use cash_flow::{compute_cash_flow, CashFlow, CashFlowLine, CashFlowTotals};
pub use evm::{compute_evm, EvmResult, PerformanceStatus};
pub use s_curve::{build_s_curve, month_end, SCurvePoint};
pub use utilization::{
    completion_rate, compute_budget_utilization, expense_percentage, percent_of, utilization_rate,
};
