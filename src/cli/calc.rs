//! CLI commands for ad-hoc calculations
//!
//! Runs the calculators directly on figures given on the command line,
//! without a ledger.

use clap::Subcommand;

use crate::display::{format_evm_table, format_percentage, ReportStyle};
use crate::error::ControlsResult;
use crate::services::{compute_budget_utilization, compute_evm};

/// Calculation subcommands
#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Compute earned value metrics from four figures
    Evm {
        /// Total approved budget (BAC)
        #[arg(long, allow_negative_numbers = true)]
        budget: f64,

        /// Actual cost to date (AC)
        #[arg(long, allow_negative_numbers = true)]
        actual: f64,

        /// Planned value to date (PV)
        #[arg(long, allow_negative_numbers = true)]
        planned: f64,

        /// Earned value to date (EV)
        #[arg(long, allow_negative_numbers = true)]
        earned: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the share of the budget already spent
    Utilization {
        /// Total approved budget
        #[arg(long, allow_negative_numbers = true)]
        budget: f64,

        /// Actual cost to date
        #[arg(long, allow_negative_numbers = true)]
        actual: f64,
    },
}

/// Handle calc commands
pub fn handle_calc_command(style: &ReportStyle, cmd: CalcCommands) -> ControlsResult<()> {
    match cmd {
        CalcCommands::Evm {
            budget,
            actual,
            planned,
            earned,
            json,
        } => {
            let result = compute_evm(budget, actual, planned, earned);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", format_evm_table(&result, style));
            }
        }
        CalcCommands::Utilization { budget, actual } => {
            let utilization = compute_budget_utilization(budget, actual);
            println!("Budget utilization: {}", format_percentage(utilization));
        }
    }

    Ok(())
}
