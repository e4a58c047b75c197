//! Progress observations and the baseline schedule
//!
//! A `ProgressSnapshot` records how much of the scope was actually complete on
//! a date (drives earned value). A `BaselinePoint` records how much was
//! *planned* to be complete on a date (drives planned value).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors for percent-complete figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentValidationError {
    OutOfRange(f64),
}

impl std::fmt::Display for PercentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(v) => write!(f, "Percent complete {} is outside 0..=100", v),
        }
    }
}

impl std::error::Error for PercentValidationError {}

fn check_percent(value: f64) -> Result<f64, PercentValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(PercentValidationError::OutOfRange(value))
    }
}

/// Observed percent-complete at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub as_of: NaiveDate,
    pub percent_complete: f64,
}

impl ProgressSnapshot {
    /// Create a snapshot, rejecting values outside 0..=100 (NaN included)
    pub fn new(as_of: NaiveDate, percent_complete: f64) -> Result<Self, PercentValidationError> {
        Ok(Self {
            as_of,
            percent_complete: check_percent(percent_complete)?,
        })
    }

    pub fn validate(&self) -> Result<(), PercentValidationError> {
        check_percent(self.percent_complete).map(|_| ())
    }
}

/// Planned percent-complete at a date, taken from the baseline schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselinePoint {
    pub date: NaiveDate,
    pub planned_percent: f64,
}

impl BaselinePoint {
    pub fn new(date: NaiveDate, planned_percent: f64) -> Result<Self, PercentValidationError> {
        Ok(Self {
            date,
            planned_percent: check_percent(planned_percent)?,
        })
    }

    pub fn validate(&self) -> Result<(), PercentValidationError> {
        check_percent(self.planned_percent).map(|_| ())
    }
}
