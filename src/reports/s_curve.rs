//! S-Curve Report
//!
//! Month-by-month cumulative planned value, earned value and actual cost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{double_separator, format_bar, separator, ReportStyle};
use crate::models::ProjectLedger;
use crate::services::{build_s_curve, SCurvePoint};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SCurveReport {
    pub project: String,
    pub until: NaiveDate,
    pub budget: f64,
    pub points: Vec<SCurvePoint>,
}

impl SCurveReport {
    pub fn generate(ledger: &ProjectLedger, until: NaiveDate) -> Self {
        Self {
            project: ledger.name.clone(),
            until,
            budget: ledger.budget.total_budget.to_major(),
            points: build_s_curve(ledger, until),
        }
    }

    /// Format the report for terminal display
    ///
    /// The bar shows earned value against the budget.
    pub fn format_terminal(&self, style: &ReportStyle) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "S-Curve - {} (through {})\n",
            self.project,
            style.date(self.until)
        ));
        output.push_str(&double_separator(100));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No dated records before the cutoff.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>20} {:>20} {:>20}  {}\n",
            "Period end", "Planned", "Earned", "Actual", "Earned / budget"
        ));
        output.push_str(&separator(100));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>20} {:>20} {:>20}  {}\n",
                style.date(point.period_end),
                style.amount(point.planned),
                style.amount(point.earned),
                style.amount(point.actual),
                format_bar(point.earned, self.budget, BAR_WIDTH)
            ));
        }

        output
    }
}
