//! Core data models for sitecontrols
//!
//! Plain value types for the project-controls domain: money, the budget at
//! completion, cost and income records, progress observations and the
//! ledger that bundles them.

pub mod budget;
pub mod cash;
pub mod cost;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod progress;

pub use budget::BudgetFigure;
pub use cash::{CashEntry, FlowType};
pub use cost::{CostCategory, CostEntry};
pub use ids::CostEntryId;
pub use ledger::ProjectLedger;
pub use money::{Money, MoneyParseError};
pub use progress::{BaselinePoint, PercentValidationError, ProgressSnapshot};
