use anyhow::Result;
use clap::{Parser, Subcommand};

use sitecontrols::cli::{
    handle_calc_command, handle_export_command, handle_report_command, CalcCommands, ExportArgs,
    ReportCommands,
};
use sitecontrols::config::{ControlsPaths, Settings};
use sitecontrols::display::ReportStyle;

#[derive(Parser)]
#[command(
    name = "sitectl",
    author = "Kaylee Beyene",
    version,
    about = "Cost controls for construction projects",
    long_about = "sitectl computes earned value metrics, budget utilization, cash-flow \
                  statements and S-curves from a project ledger, and exports them as \
                  CSV, JSON or YAML."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a calculator on figures given directly
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Generate a report from a ledger
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export every report for a ledger as JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ControlsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    sitecontrols::logging::init(&settings.log_level);

    let style = ReportStyle::from(&settings);

    match cli.command {
        Some(Commands::Calc(cmd)) => handle_calc_command(&style, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&style, cmd)?,
        Some(Commands::Export(args)) => {
            handle_export_command(args, settings.default_export_format, settings.status_tolerance)?
        }
        Some(Commands::Config) => {
            println!("sitectl Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Status tolerance: {}", settings.status_tolerance);
            println!("  Export format:    {}", settings.default_export_format);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("sitectl - cost controls for construction projects");
            println!();
            println!("Run 'sitectl --help' for usage information.");
        }
    }

    Ok(())
}
