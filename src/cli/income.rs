//! Income CLI command

use clap::Args;
use std::path::PathBuf;

use super::create_output;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::reports::IncomeReport;
use crate::snapshot::Snapshot;

/// Arguments of `income`
#[derive(Args, Debug)]
pub struct IncomeArgs {
    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the income command
pub fn handle_income_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: IncomeArgs,
) -> LedgerResult<()> {
    let report = IncomeReport::generate(&snapshot.income_sources);

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Income report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.money_format));
    }

    Ok(())
}
