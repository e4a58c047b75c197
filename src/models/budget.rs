//! Budget at completion (BAC)
//!
//! The approved total cost of a project's scope. Every planned-value and
//! earned-value figure is expressed as a fraction of it.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Planned total cost of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetFigure {
    pub total_budget: Money,
}

impl BudgetFigure {
    pub fn new(total_budget: Money) -> Self {
        Self { total_budget }
    }

    /// The share of the budget matching a percent-complete figure
    ///
    /// Returned in major units because the EVM calculator works on floats.
    pub fn portion(&self, percent: f64) -> f64 {
        self.total_budget.to_major() * percent / 100.0
    }

    /// Check the `total_budget >= 0` invariant
    pub fn is_valid(&self) -> bool {
        !self.total_budget.is_negative()
    }
}
