//! Cost entries
//!
//! A cost entry is a recorded expense or payment against the project. The sum
//! of cost entries up to a date is the project's actual cost (AC) at that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cash::CashEntry;
use super::ids::CostEntryId;
use super::money::Money;

/// Cost category used for breakdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Material,
    Labor,
    Equipment,
    Subcontract,
    Overhead,
    #[default]
    Other,
}

impl CostCategory {
    /// All categories in display order
    pub const ALL: [CostCategory; 6] = [
        CostCategory::Material,
        CostCategory::Labor,
        CostCategory::Equipment,
        CostCategory::Subcontract,
        CostCategory::Overhead,
        CostCategory::Other,
    ];
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CostCategory::Material => "Material",
            CostCategory::Labor => "Labor",
            CostCategory::Equipment => "Equipment",
            CostCategory::Subcontract => "Subcontract",
            CostCategory::Overhead => "Overhead",
            CostCategory::Other => "Other",
        };
        f.write_str(name)
    }
}

/// A recorded expense or payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    #[serde(default)]
    pub id: CostEntryId,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub category: CostCategory,
    #[serde(default)]
    pub description: String,
}

impl CostEntry {
    /// Create a new cost entry
    pub fn new(date: NaiveDate, amount: Money, category: CostCategory) -> Self {
        Self {
            id: CostEntryId::new(),
            date,
            amount,
            category,
            description: String::new(),
        }
    }

    /// Set the description (builder style)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// View this cost as an expense line for cash-flow statements
    pub fn to_cash_entry(&self) -> CashEntry {
        CashEntry {
            date: self.date,
            amount: self.amount,
            description: self.description.clone(),
        }
    }
}
