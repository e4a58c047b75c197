//! Cash Flow Report
//!
//! Chronological statement of income and expenses with running balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{double_separator, format_percentage, separator, truncate, ReportStyle};
use crate::models::{FlowType, ProjectLedger};
use crate::services::{compute_cash_flow, expense_percentage, CashFlow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowReport {
    pub project: String,
    pub flow: CashFlow,
    /// Expenses as a share of income
    pub expense_percentage: f64,
}

impl CashFlowReport {
    /// Generate the cash-flow statement for a ledger
    ///
    /// Income entries are the ledger's income records; expense entries are its
    /// cost entries.
    pub fn generate(ledger: &ProjectLedger) -> Self {
        let flow = compute_cash_flow(&ledger.income, &ledger.expense_entries());
        let totals = flow.totals;

        debug!(
            project = %ledger.name,
            lines = flow.entries.len(),
            balance = %totals.balance,
            "cash flow merged"
        );

        Self {
            project: ledger.name.clone(),
            expense_percentage: expense_percentage(
                totals.total_expense.to_major(),
                totals.total_income.to_major(),
            ),
            flow,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, style: &ReportStyle) -> String {
        let mut output = String::new();
        let totals = &self.flow.totals;

        output.push_str(&format!("Cash Flow - {}\n", self.project));
        output.push_str(&double_separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:<8} {:<26} {:>15} {:>15}\n",
            "Date", "Type", "Description", "Amount", "Balance"
        ));
        output.push_str(&separator(80));
        output.push('\n');

        for line in &self.flow.entries {
            let kind = match line.flow {
                FlowType::Income => "IN",
                FlowType::Expense => "OUT",
            };
            output.push_str(&format!(
                "{:<12} {:<8} {:<26} {:>15} {:>15}\n",
                style.date(line.date),
                kind,
                truncate(&line.description, 26),
                style.money(line.signed_amount()),
                style.money(line.running_balance)
            ));
        }

        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!("Total income:  {}\n", style.money(totals.total_income)));
        output.push_str(&format!("Total expense: {}\n", style.money(totals.total_expense)));
        output.push_str(&format!("Balance:       {}\n", style.money(totals.balance)));
        output.push_str(&format!(
            "Expense ratio: {}\n",
            format_percentage(self.expense_percentage)
        ));

        output
    }
}
