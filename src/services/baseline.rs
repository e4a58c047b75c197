//! Deriving EVM inputs from a project ledger
//!
//! The calculator takes four plain amounts. This module produces them for an
//! as-of date:
//!
//! - actual cost: sum of cost entries dated on or before the date
//! - earned value: budget share of the latest progress snapshot on or before
//!   the date
//! - planned value: budget share of the baseline schedule, linearly
//!   interpolated by day between baseline points
//!
//! Planned value comes only from the baseline (or an explicit override).
//! Without either it is zero, which the schedule status reports as `NoData`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::evm::{compute_evm, EvmResult};
use crate::models::{BaselinePoint, BudgetFigure, CostEntry, Money, ProgressSnapshot, ProjectLedger};

/// Sum of costs recorded on or before `as_of`
pub fn actual_cost_to(costs: &[CostEntry], as_of: NaiveDate) -> Money {
    costs
        .iter()
        .filter(|c| c.date <= as_of)
        .map(|c| c.amount)
        .sum()
}

/// Percent complete of the latest snapshot on or before `as_of`
///
/// When two snapshots share a date the later one in input order wins.
pub fn percent_complete_at(progress: &[ProgressSnapshot], as_of: NaiveDate) -> Option<f64> {
    progress
        .iter()
        .filter(|p| p.as_of <= as_of)
        .max_by_key(|p| p.as_of)
        .map(|p| p.percent_complete)
}

/// Earned value at `as_of`; zero before the first progress snapshot
pub fn earned_value_at(
    budget: &BudgetFigure,
    progress: &[ProgressSnapshot],
    as_of: NaiveDate,
) -> f64 {
    budget.portion(percent_complete_at(progress, as_of).unwrap_or(0.0))
}

/// Planned percent complete at `as_of`, or `None` for an empty baseline
///
/// Zero before the first point, the last point's value after the last point,
/// linear by day in between.
pub fn planned_percent_at(baseline: &[BaselinePoint], as_of: NaiveDate) -> Option<f64> {
    let mut points = baseline.to_vec();
    points.sort_by_key(|p| p.date);

    let first = points.first()?;
    let last = points.last()?;

    if as_of < first.date {
        return Some(0.0);
    }
    if as_of >= last.date {
        return Some(last.planned_percent);
    }

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from.date <= as_of && as_of < to.date {
            let span = (to.date - from.date).num_days() as f64;
            let elapsed = (as_of - from.date).num_days() as f64;
            let rise = to.planned_percent - from.planned_percent;
            return Some(from.planned_percent + rise * elapsed / span);
        }
    }

    Some(last.planned_percent)
}

/// Planned value at `as_of`, or `None` for an empty baseline
pub fn planned_value_at(
    budget: &BudgetFigure,
    baseline: &[BaselinePoint],
    as_of: NaiveDate,
) -> Option<f64> {
    planned_percent_at(baseline, as_of).map(|pct| budget.portion(pct))
}

/// The four calculator inputs, in major currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvmInputs {
    pub total_budget: f64,
    pub actual_cost: f64,
    pub planned_value: f64,
    pub earned_value: f64,
    /// False when planned value is a zero placeholder (no baseline, no override)
    pub has_planned_value: bool,
}

impl EvmInputs {
    /// Derive inputs from a ledger at `as_of`
    pub fn from_ledger(ledger: &ProjectLedger, as_of: NaiveDate) -> Self {
        let planned = planned_value_at(&ledger.budget, &ledger.baseline, as_of);

        Self {
            total_budget: ledger.budget.total_budget.to_major(),
            actual_cost: actual_cost_to(&ledger.costs, as_of).to_major(),
            planned_value: planned.unwrap_or(0.0),
            earned_value: earned_value_at(&ledger.budget, &ledger.progress, as_of),
            has_planned_value: planned.is_some(),
        }
    }

    /// Replace the derived planned value
    pub fn with_planned_value(mut self, planned_value: f64) -> Self {
        self.planned_value = planned_value;
        self.has_planned_value = true;
        self
    }

    pub fn compute(&self) -> EvmResult {
        compute_evm(
            self.total_budget,
            self.actual_cost,
            self.planned_value,
            self.earned_value,
        )
    }
}

/// Run the calculator for a ledger at `as_of`
///
/// An explicit `planned_override` takes precedence over the baseline.
pub fn evm_for_ledger(
    ledger: &ProjectLedger,
    as_of: NaiveDate,
    planned_override: Option<f64>,
) -> EvmResult {
    let inputs = EvmInputs::from_ledger(ledger, as_of);
    match planned_override {
        Some(pv) => inputs.with_planned_value(pv).compute(),
        None => inputs.compute(),
    }
}
