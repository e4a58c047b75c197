//! Tabular rendering of EVM metrics

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{format_index, ReportStyle};
use crate::services::EvmResult;

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(metric: &'static str, value: String) -> MetricRow {
    MetricRow { metric, value }
}

/// Render an `EvmResult` as a two-column metric table
pub fn format_evm_table(result: &EvmResult, style: &ReportStyle) -> String {
    let tolerance = style.status_tolerance;
    let rows = vec![
        row("Budget at completion (BAC)", style.amount(result.bac)),
        row("Planned value (PV)", style.amount(result.pv)),
        row("Earned value (EV)", style.amount(result.ev)),
        row("Actual cost (AC)", style.amount(result.ac)),
        row("Cost variance (CV)", style.amount(result.cv)),
        row("Schedule variance (SV)", style.amount(result.sv)),
        row(
            "Cost performance index (CPI)",
            format_index(result.cpi, result.cost_status(tolerance)),
        ),
        row(
            "Schedule performance index (SPI)",
            format_index(result.spi, result.schedule_status(tolerance)),
        ),
        row("Estimate at completion (EAC)", style.amount(result.eac)),
        row("Estimate to complete (ETC)", style.amount(result.etc())),
        row("Variance at completion (VAC)", style.amount(result.vac())),
    ];

    Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right())
        .to_string()
}
