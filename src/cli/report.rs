//! CLI commands for the dashboard and the trend reports

use clap::Args;
use std::path::PathBuf;

use super::create_output;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::reports::{DashboardReport, TrendsReport};
use crate::snapshot::Snapshot;

/// Arguments of `dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of `reports`
#[derive(Args, Debug)]
pub struct ReportsArgs {
    /// Only the last N months (e.g. 3, 6 or 12)
    #[arg(short, long)]
    pub months: Option<usize>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: DashboardArgs,
) -> LedgerResult<()> {
    let report = DashboardReport::generate(snapshot, settings);

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.money_format));
    }

    Ok(())
}

/// Handle the reports command
pub fn handle_reports_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: ReportsArgs,
) -> LedgerResult<()> {
    let report = TrendsReport::generate(snapshot, args.months);

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Trend report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.money_format));
    }

    Ok(())
}
