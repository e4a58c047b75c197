//! EVM Summary Report
//!
//! Earned value position of one project at an as-of date, with budget
//! utilization and a cost breakdown by category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::display::{double_separator, format_evm_table, format_percentage, separator, ReportStyle};
use crate::models::{CostCategory, Money, ProjectLedger};
use crate::services::{
    compute_budget_utilization, percent_of, EvmInputs, EvmResult, PerformanceStatus,
};

/// Cost to date for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownRow {
    pub category: CostCategory,
    pub amount: Money,
    pub entry_count: usize,
    /// Share of total actual cost
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvmReport {
    pub project: String,
    pub as_of: NaiveDate,
    pub inputs: EvmInputs,
    pub result: EvmResult,
    pub cost_status: PerformanceStatus,
    pub schedule_status: PerformanceStatus,
    pub budget_utilization: f64,
    pub breakdown: Vec<CostBreakdownRow>,
}

impl EvmReport {
    /// Generate the report for a ledger at `as_of`
    ///
    /// `planned_override` replaces the baseline-derived planned value.
    pub fn generate(
        ledger: &ProjectLedger,
        as_of: NaiveDate,
        planned_override: Option<f64>,
        tolerance: f64,
    ) -> Self {
        let mut inputs = EvmInputs::from_ledger(ledger, as_of);
        if let Some(pv) = planned_override {
            inputs = inputs.with_planned_value(pv);
        }
        let result = inputs.compute();

        debug!(
            project = %ledger.name,
            %as_of,
            cpi = result.cpi,
            spi = result.spi,
            "evm computed"
        );

        Self {
            project: ledger.name.clone(),
            as_of,
            inputs,
            result,
            cost_status: result.cost_status(tolerance),
            schedule_status: result.schedule_status(tolerance),
            budget_utilization: compute_budget_utilization(inputs.total_budget, inputs.actual_cost),
            breakdown: cost_breakdown(ledger, as_of),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, style: &ReportStyle) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Earned Value Summary - {} (as of {})\n",
            self.project,
            style.date(self.as_of)
        ));
        output.push_str(&double_separator(70));
        output.push('\n');
        output.push_str(&format_evm_table(&self.result, style));
        output.push_str("\n\n");

        output.push_str(&format!(
            "Budget utilization: {}\n",
            format_percentage(self.budget_utilization)
        ));
        if !self.inputs.has_planned_value {
            output.push_str("No baseline schedule: planned value treated as 0, SPI has no data\n");
        }

        if !self.breakdown.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>20} {:>8} {:>8}\n",
                "Category", "Actual cost", "Entries", "%"
            ));
            output.push_str(&separator(70));
            output.push('\n');
            for row in &self.breakdown {
                output.push_str(&format!(
                    "{:<20} {:>20} {:>8} {:>8}\n",
                    row.category.to_string(),
                    style.money(row.amount),
                    row.entry_count,
                    format_percentage(row.percentage)
                ));
            }
        }

        output
    }
}

fn cost_breakdown(ledger: &ProjectLedger, as_of: NaiveDate) -> Vec<CostBreakdownRow> {
    let mut by_category: BTreeMap<CostCategory, (Money, usize)> = BTreeMap::new();
    for cost in ledger.costs.iter().filter(|c| c.date <= as_of) {
        let entry = by_category.entry(cost.category).or_insert((Money::zero(), 0));
        entry.0 += cost.amount;
        entry.1 += 1;
    }

    let total: Money = by_category.values().map(|(amount, _)| *amount).sum();

    let mut rows: Vec<CostBreakdownRow> = by_category
        .into_iter()
        .map(|(category, (amount, entry_count))| CostBreakdownRow {
            category,
            amount,
            entry_count,
            percentage: percent_of(amount.cents() as f64, total.cents() as f64),
        })
        .collect();

    // Largest first; category order breaks ties
    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}
