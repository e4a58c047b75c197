//! Percentage aggregates shared by the dashboards
//!
//! Budget utilization, expense share, task completion and resource
//! utilization are all the same zero-guarded ratio. A zero whole yields 0,
//! which reads as "nothing to measure yet" rather than "fully used".

/// `part / whole * 100`, or 0 when `whole` is zero
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Share of the budget already spent
///
/// # Examples
/// ```
/// use sitecontrols::services::compute_budget_utilization;
/// assert_eq!(compute_budget_utilization(200.0, 50.0), 25.0);
/// assert_eq!(compute_budget_utilization(0.0, 50.0), 0.0);
/// ```
pub fn compute_budget_utilization(total_budget: f64, actual_cost: f64) -> f64 {
    percent_of(actual_cost, total_budget)
}

/// Expenses as a percentage of income
pub fn expense_percentage(total_expense: f64, total_income: f64) -> f64 {
    percent_of(total_expense, total_income)
}

/// Completed items as a percentage of all items
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    percent_of(completed as f64, total as f64)
}

/// Used capacity as a percentage of available capacity
pub fn utilization_rate(used: f64, capacity: f64) -> f64 {
    percent_of(used, capacity)
}
