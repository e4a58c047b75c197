//! S-curve construction
//!
//! Samples cumulative planned value, earned value and actual cost at the end
//! of each calendar month, from the month of the ledger's earliest record up
//! to the month containing `until`. The final sample is taken at `until`
//! itself rather than the month end.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::baseline::EvmInputs;
use crate::models::ProjectLedger;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SCurvePoint {
    pub period_end: NaiveDate,
    pub planned: f64,
    pub earned: f64,
    pub actual: f64,
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Build the monthly S-curve for a ledger
pub fn build_s_curve(ledger: &ProjectLedger, until: NaiveDate) -> Vec<SCurvePoint> {
    let Some((start, _)) = ledger.date_range() else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut cursor = start;

    while cursor <= until {
        let period_end = month_end(cursor).min(until);
        let inputs = EvmInputs::from_ledger(ledger, period_end);

        points.push(SCurvePoint {
            period_end,
            planned: inputs.planned_value,
            earned: inputs.earned_value,
            actual: inputs.actual_cost,
        });

        match period_end.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }

    points
}
