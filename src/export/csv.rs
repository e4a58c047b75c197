//! CSV export of reports
//!
//! Amounts are written in major units with two decimals so the files open
//! cleanly in spreadsheets.

use std::io::Write;

use crate::error::ControlsResult;
use crate::reports::{CashFlowReport, EvmReport, SCurveReport};

fn fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// Write the EVM summary as `metric,value` rows followed by the cost breakdown
pub fn write_evm_csv<W: Write>(report: &EvmReport, writer: W) -> ControlsResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let r = &report.result;

    csv.write_record(["Project", "As Of", "Metric", "Value"])?;
    let as_of = report.as_of.to_string();
    let metrics = [
        ("BAC", fixed(r.bac)),
        ("PV", fixed(r.pv)),
        ("EV", fixed(r.ev)),
        ("AC", fixed(r.ac)),
        ("CV", fixed(r.cv)),
        ("SV", fixed(r.sv)),
        ("CPI", format!("{:.4}", r.cpi)),
        ("SPI", format!("{:.4}", r.spi)),
        ("EAC", fixed(r.eac)),
        ("ETC", fixed(r.etc())),
        ("VAC", fixed(r.vac())),
        ("Cost Status", report.cost_status.to_string()),
        ("Schedule Status", report.schedule_status.to_string()),
        ("Budget Utilization %", fixed(report.budget_utilization)),
    ];
    for (metric, value) in metrics {
        csv.write_record([report.project.as_str(), as_of.as_str(), metric, value.as_str()])?;
    }

    for row in &report.breakdown {
        let metric = format!("Cost: {}", row.category);
        let value = fixed(row.amount.to_major());
        csv.write_record([
            report.project.as_str(),
            as_of.as_str(),
            metric.as_str(),
            value.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the merged cash-flow lines
pub fn write_cash_flow_csv<W: Write>(report: &CashFlowReport, writer: W) -> ControlsResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Date", "Type", "Description", "Amount", "Running Balance"])?;
    for line in &report.flow.entries {
        csv.write_record([
            line.date.to_string(),
            line.flow.to_string(),
            line.description.clone(),
            fixed(line.amount.to_major()),
            fixed(line.running_balance.to_major()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the S-curve samples
pub fn write_s_curve_csv<W: Write>(report: &SCurveReport, writer: W) -> ControlsResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Period End", "Planned", "Earned", "Actual"])?;
    for point in &report.points {
        csv.write_record([
            point.period_end.to_string(),
            fixed(point.planned),
            fixed(point.earned),
            fixed(point.actual),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CashEntry, CostCategory, CostEntry, Money, ProgressSnapshot, ProjectLedger};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> ProjectLedger {
        let mut ledger = ProjectLedger::new("Depot, Phase 2", Money::from_units(1_000));
        ledger.costs = vec![CostEntry::new(
            date(2025, 1, 3),
            Money::from_cents(12_345),
            CostCategory::Labor,
        )
        .with_description("Crew, night shift")];
        ledger.income = vec![CashEntry::new(date(2025, 1, 2), Money::from_units(500), "Advance")];
        ledger.progress = vec![ProgressSnapshot::new(date(2025, 1, 31), 10.0).unwrap()];
        ledger
    }

    #[test]
    fn test_evm_csv() {
        let report = EvmReport::generate(&ledger(), date(2025, 1, 31), None, 0.05);
        let mut out = Vec::new();
        write_evm_csv(&report, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Project,As Of,Metric,Value\n"));
        assert!(text.contains("\"Depot, Phase 2\",2025-01-31,AC,123.45"));
        assert!(text.contains("Schedule Status,no data"));
        assert!(text.contains("Cost: Labor,123.45"));
    }

    #[test]
    fn test_cash_flow_csv_quotes_fields() {
        let report = CashFlowReport::generate(&ledger());
        let mut out = Vec::new();
        write_cash_flow_csv(&report, &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "income");
        assert_eq!(&rows[1][2], "Crew, night shift");
        assert_eq!(&rows[1][4], "376.55");
    }

    #[test]
    fn test_s_curve_csv() {
        let report = SCurveReport::generate(&ledger(), date(2025, 1, 31));
        let mut out = Vec::new();
        write_s_curve_csv(&report, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Period End,Planned,Earned,Actual\n2025-01-31,0.00,100.00,123.45\n");
    }
}
