//! Cash-flow records
//!
//! `CashEntry` is the plain `{date, amount, description}` record that income
//! and expense sequences are made of before they are merged into a cash-flow
//! statement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Income,
    Expense,
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowType::Income => f.write_str("income"),
            FlowType::Expense => f.write_str("expense"),
        }
    }
}

/// A dated income or expense amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashEntry {
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
}

impl CashEntry {
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_type_serde() {
        assert_eq!(serde_json::to_string(&FlowType::Income).unwrap(), "\"income\"");
        let parsed: FlowType = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(parsed, FlowType::Expense);
    }

    #[test]
    fn test_cash_entry_yaml() {
        let entry: CashEntry =
            serde_yaml::from_str("date: 2025-01-05\namount: 5000000\ndescription: Advance\n")
                .unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(entry.amount, Money::from_units(5_000_000));
        assert_eq!(entry.description, "Advance");
    }
}
