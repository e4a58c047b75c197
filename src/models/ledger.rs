//! Project ledger
//!
//! The bundle of records a view holds for one project: budget, costs, income,
//! progress snapshots and the baseline schedule. The calculator never reads a
//! ledger directly; the derivation helpers in `services::baseline` unpack it
//! into plain numbers first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::BudgetFigure;
use super::cash::CashEntry;
use super::cost::CostEntry;
use super::money::Money;
use super::progress::{BaselinePoint, ProgressSnapshot};
use crate::error::{ControlsError, ControlsResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLedger {
    pub name: String,
    #[serde(default)]
    pub budget: BudgetFigure,
    #[serde(default)]
    pub costs: Vec<CostEntry>,
    #[serde(default)]
    pub income: Vec<CashEntry>,
    #[serde(default)]
    pub progress: Vec<ProgressSnapshot>,
    #[serde(default)]
    pub baseline: Vec<BaselinePoint>,
}

impl ProjectLedger {
    /// Create an empty ledger with a budget
    pub fn new(name: impl Into<String>, total_budget: Money) -> Self {
        Self {
            name: name.into(),
            budget: BudgetFigure::new(total_budget),
            ..Default::default()
        }
    }

    /// Check every record against its model invariant
    ///
    /// Returns the first violation found. The calculator itself accepts any
    /// numbers, so this is where malformed ledger data gets stopped.
    pub fn validate(&self) -> ControlsResult<()> {
        if !self.budget.is_valid() {
            return Err(ControlsError::Validation(format!(
                "Project '{}' has a negative total budget",
                self.name
            )));
        }

        if let Some(i) = self.costs.iter().position(|c| c.amount.is_negative()) {
            return Err(ControlsError::negative_amount("Cost entry", i));
        }

        if let Some(i) = self.income.iter().position(|e| e.amount.is_negative()) {
            return Err(ControlsError::negative_amount("Income entry", i));
        }

        let totals = [
            ("Cost entries", Money::checked_sum(self.costs.iter().map(|c| c.amount))),
            ("Income entries", Money::checked_sum(self.income.iter().map(|e| e.amount))),
        ];
        if let Some((record, _)) = totals.iter().find(|(_, total)| total.is_none()) {
            return Err(ControlsError::Validation(format!(
                "{} total exceeds the supported amount range",
                record
            )));
        }

        for (i, snapshot) in self.progress.iter().enumerate() {
            if snapshot.validate().is_err() {
                return Err(ControlsError::percent_out_of_range(
                    "Progress snapshot",
                    i,
                    snapshot.percent_complete,
                ));
            }
        }

        for (i, point) in self.baseline.iter().enumerate() {
            if point.validate().is_err() {
                return Err(ControlsError::percent_out_of_range(
                    "Baseline point",
                    i,
                    point.planned_percent,
                ));
            }
        }

        Ok(())
    }

    /// Cost entries viewed as expense lines
    pub fn expense_entries(&self) -> Vec<CashEntry> {
        self.costs.iter().map(CostEntry::to_cash_entry).collect()
    }

    /// Earliest and latest date across all dated records
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self
            .costs
            .iter()
            .map(|c| c.date)
            .chain(self.income.iter().map(|e| e.date))
            .chain(self.progress.iter().map(|p| p.as_of))
            .chain(self.baseline.iter().map(|b| b.date));

        dates.fold(None, |range, d| match range {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }
}
