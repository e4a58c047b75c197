//! CLI command for bundle export
//!
//! Writes every report for one ledger as a single JSON or YAML document.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::report::{create_output, parse_date_or_today};
use crate::error::ControlsResult;
use crate::export::{export_bundle_json, export_bundle_yaml, ExportFormat, ReportBundle};
use crate::storage::load_ledger;

/// Arguments for `sitectl export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Ledger file (.json, .yaml or .yml)
    pub ledger: PathBuf,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Status date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Planned value to use instead of the baseline schedule
    #[arg(long)]
    pub planned: Option<f64>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    args: ExportArgs,
    default_format: ExportFormat,
    tolerance: f64,
) -> ControlsResult<()> {
    let ledger = load_ledger(&args.ledger)?;
    let as_of = parse_date_or_today(args.as_of.as_deref(), "as-of")?;
    let format = args.format.unwrap_or(default_format);

    let bundle = ReportBundle::generate(&ledger, as_of, args.planned, tolerance);

    match args.output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            write_bundle(&bundle, format, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), %format, "bundle exported");
            println!("Reports for '{}' exported to: {}", bundle.project, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_bundle(&bundle, format, &mut handle)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn write_bundle<W: Write>(
    bundle: &ReportBundle,
    format: ExportFormat,
    writer: &mut W,
) -> ControlsResult<()> {
    match format {
        ExportFormat::Json => export_bundle_json(bundle, writer, true),
        ExportFormat::Yaml => export_bundle_yaml(bundle, writer),
    }
}
