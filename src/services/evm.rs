//! Earned value calculator
//!
//! Derives the standard project-controls metrics from four amounts: budget at
//! completion, actual cost, planned value and earned value. Every function
//! here is total: no validation, no errors, no side effects. Zero
//! denominators fall back to the neutral index 1.0, and `EvmResult` keeps the
//! raw inputs so callers can tell "no data yet" apart from "on target" via
//! [`EvmResult::cost_status`] and [`EvmResult::schedule_status`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived output of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvmResult {
    /// Budget at completion
    pub bac: f64,
    /// Planned value
    pub pv: f64,
    /// Earned value
    pub ev: f64,
    /// Actual cost
    pub ac: f64,
    /// Cost variance (`ev - ac`), negative when over budget
    pub cv: f64,
    /// Schedule variance (`ev - pv`), negative when behind schedule
    pub sv: f64,
    /// Cost performance index
    pub cpi: f64,
    /// Schedule performance index
    pub spi: f64,
    /// Estimate at completion
    pub eac: f64,
}

/// Reading of a performance index against its target of 1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    /// The index denominator was zero; the 1.0 is a placeholder
    NoData,
    Favorable,
    OnTarget,
    Unfavorable,
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceStatus::NoData => "no data",
            PerformanceStatus::Favorable => "favorable",
            PerformanceStatus::OnTarget => "on target",
            PerformanceStatus::Unfavorable => "unfavorable",
        };
        f.write_str(label)
    }
}

/// Compute the earned value metrics
///
/// # Examples
/// ```
/// use sitecontrols::services::compute_evm;
///
/// let r = compute_evm(100_000_000.0, 40_000_000.0, 50_000_000.0, 35_000_000.0);
/// assert_eq!(r.cv, -5_000_000.0);
/// assert_eq!(r.sv, -15_000_000.0);
/// assert_eq!(r.cpi, 0.875);
/// assert_eq!(r.spi, 0.7);
/// ```
pub fn compute_evm(
    total_budget: f64,
    actual_cost: f64,
    planned_value: f64,
    earned_value: f64,
) -> EvmResult {
    let cv = earned_value - actual_cost;
    let sv = earned_value - planned_value;
    let cpi = if actual_cost > 0.0 {
        earned_value / actual_cost
    } else {
        1.0
    };
    let spi = if planned_value > 0.0 {
        earned_value / planned_value
    } else {
        1.0
    };
    let eac = if cpi > 0.0 {
        actual_cost + (total_budget - earned_value) / cpi
    } else {
        total_budget
    };

    EvmResult {
        bac: total_budget,
        pv: planned_value,
        ev: earned_value,
        ac: actual_cost,
        cv,
        sv,
        cpi,
        spi,
        eac,
    }
}

impl EvmResult {
    /// Variance at completion (`bac - eac`)
    pub fn vac(&self) -> f64 {
        self.bac - self.eac
    }

    /// Estimate to complete (`eac - ac`)
    pub fn etc(&self) -> f64 {
        self.eac - self.ac
    }

    /// Classify the CPI; `NoData` when no cost has been recorded
    pub fn cost_status(&self, tolerance: f64) -> PerformanceStatus {
        classify(self.cpi, self.ac, tolerance)
    }

    /// Classify the SPI; `NoData` when nothing was planned yet
    pub fn schedule_status(&self, tolerance: f64) -> PerformanceStatus {
        classify(self.spi, self.pv, tolerance)
    }
}

fn classify(index: f64, denominator: f64, tolerance: f64) -> PerformanceStatus {
    if denominator.is_nan() || denominator <= 0.0 || index.is_nan() {
        PerformanceStatus::NoData
    } else if index > 1.0 + tolerance {
        PerformanceStatus::Favorable
    } else if index < 1.0 - tolerance {
        PerformanceStatus::Unfavorable
    } else {
        PerformanceStatus::OnTarget
    }
}
