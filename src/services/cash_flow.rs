//! Cash-flow merge
//!
//! Combines income and expense sequences into one chronological statement.
//! The sort is stable: entries sharing a date keep their input order, with
//! all income lines ahead of expense lines for that date since income is
//! concatenated first. Totals are summed in cents, so
//! `total_income - total_expense == balance` holds exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CashEntry, FlowType, Money};

/// One line of a merged cash-flow statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowLine {
    pub date: NaiveDate,
    pub flow: FlowType,
    pub amount: Money,
    pub description: String,
    /// Cumulative income minus expense up to and including this line
    pub running_balance: Money,
}

impl CashFlowLine {
    /// Amount with expenses negated
    pub fn signed_amount(&self) -> Money {
        match self.flow {
            FlowType::Income => self.amount,
            FlowType::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CashFlowTotals {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
}

/// Merged statement plus aggregates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CashFlow {
    pub entries: Vec<CashFlowLine>,
    pub totals: CashFlowTotals,
}

/// Merge income and expense entries into a date-ordered statement
pub fn compute_cash_flow(income_entries: &[CashEntry], expense_entries: &[CashEntry]) -> CashFlow {
    let tagged = income_entries
        .iter()
        .map(|e| (FlowType::Income, e))
        .chain(expense_entries.iter().map(|e| (FlowType::Expense, e)));

    let mut lines: Vec<CashFlowLine> = tagged
        .map(|(flow, entry)| CashFlowLine {
            date: entry.date,
            flow,
            amount: entry.amount,
            description: entry.description.clone(),
            running_balance: Money::zero(),
        })
        .collect();

    // sort_by_key is stable
    lines.sort_by_key(|line| line.date);

    let mut running = Money::zero();
    for line in &mut lines {
        running += line.signed_amount();
        line.running_balance = running;
    }

    let total_income: Money = income_entries.iter().map(|e| e.amount).sum();
    let total_expense: Money = expense_entries.iter().map(|e| e.amount).sum();

    CashFlow {
        entries: lines,
        totals: CashFlowTotals {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(day: u32, units: i64, desc: &str) -> CashEntry {
        CashEntry::new(date(2025, 1, day), Money::from_units(units), desc)
    }

    #[test]
    fn test_merge_orders_by_date() {
        let income = vec![entry(20, 500, "Progress claim"), entry(1, 1000, "Advance")];
        let expenses = vec![entry(5, 300, "Rebar"), entry(25, 100, "Fuel")];

        let flow = compute_cash_flow(&income, &expenses);
        let descriptions: Vec<&str> = flow.entries.iter().map(|l| l.description.as_str()).collect();

        assert_eq!(descriptions, vec!["Advance", "Rebar", "Progress claim", "Fuel"]);
        assert_eq!(flow.entries[1].flow, FlowType::Expense);
    }

    #[test]
    fn test_ties_keep_input_order_income_first() {
        let income = vec![entry(10, 1, "I1"), entry(10, 2, "I2")];
        let expenses = vec![entry(10, 3, "E1"), entry(9, 4, "E0"), entry(10, 5, "E2")];

        let flow = compute_cash_flow(&income, &expenses);
        let descriptions: Vec<&str> = flow.entries.iter().map(|l| l.description.as_str()).collect();

        assert_eq!(descriptions, vec!["E0", "I1", "I2", "E1", "E2"]);
    }

    #[test]
    fn test_totals_and_running_balance() {
        let income = vec![entry(1, 1000, "Advance")];
        let expenses = vec![entry(2, 300, "Rebar"), entry(3, 900, "Concrete")];

        let flow = compute_cash_flow(&income, &expenses);

        assert_eq!(flow.totals.total_income, Money::from_units(1000));
        assert_eq!(flow.totals.total_expense, Money::from_units(1200));
        assert_eq!(flow.totals.balance, Money::from_units(-200));

        let running: Vec<i64> = flow.entries.iter().map(|l| l.running_balance.units()).collect();
        assert_eq!(running, vec![1000, 700, -200]);
        assert_eq!(
            flow.entries.last().map(|l| l.running_balance),
            Some(flow.totals.balance)
        );
    }

    #[test]
    fn test_empty_inputs() {
        let flow = compute_cash_flow(&[], &[]);
        assert!(flow.entries.is_empty());
        assert_eq!(flow.totals, CashFlowTotals::default());
    }

    fn arb_entries() -> impl Strategy<Value = Vec<CashEntry>> {
        prop::collection::vec((1u32..=28, 0i64..10_000_000), 0..30).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (day, cents))| {
                    CashEntry::new(date(2025, 3, day), Money::from_cents(cents), format!("#{}", i))
                })
                .collect()
        })
    }

    proptest! {
        /// Balance always equals income minus expense.
        #[test]
        fn balance_identity(income in arb_entries(), expenses in arb_entries()) {
            let flow = compute_cash_flow(&income, &expenses);
            prop_assert_eq!(
                flow.totals.total_income - flow.totals.total_expense,
                flow.totals.balance
            );
            prop_assert_eq!(flow.entries.len(), income.len() + expenses.len());
        }

        /// A stable re-sort by date leaves the output unchanged.
        #[test]
        fn output_is_sort_fixed_point(income in arb_entries(), expenses in arb_entries()) {
            let flow = compute_cash_flow(&income, &expenses);
            let mut resorted = flow.entries.clone();
            resorted.sort_by_key(|line| line.date);
            prop_assert_eq!(resorted, flow.entries);
        }
    }
}
