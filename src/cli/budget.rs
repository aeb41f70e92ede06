//! Budget CLI command
//!
//! Shows the budget overview. Items can be switched off or given a new amount
//! for the run to see how the totals and utilization would change.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::create_output;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ItemId, Money};
use crate::reports::BudgetOverviewReport;
use crate::services::budget::{find_item, set_active, set_amount};
use crate::snapshot::Snapshot;

/// Arguments of `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Treat these items as inactive (e.g. "item-3" or "3")
    #[arg(long, value_name = "ITEM_ID")]
    pub disable: Vec<ItemId>,

    /// Give an item a new amount, written in the configured locale
    /// (e.g. "item-1=650" or "1=1.234,50")
    #[arg(long, value_name = "ITEM_ID=AMOUNT", value_parser = parse_assignment)]
    pub set: Vec<(ItemId, String)>,

    /// Only list categories above the warn threshold
    #[arg(long, conflicts_with = "output")]
    pub at_risk: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> Result<(ItemId, String), String> {
    let (id, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM_ID=AMOUNT, got '{}'", s))?;
    let id = id
        .parse::<ItemId>()
        .map_err(|e| format!("invalid item id '{}': {}", id.trim(), e))?;
    Ok((id, amount.trim().to_string()))
}

/// Handle the budget command
pub fn handle_budget_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: BudgetArgs,
) -> LedgerResult<()> {
    let mut categories = snapshot.categories.clone();
    for (item_id, raw_amount) in &args.set {
        let amount = Money::parse_localized(raw_amount, &settings.money_format)
            .map_err(|e| LedgerError::validation("amount", e.to_string()))?;
        let (category_id, _) =
            find_item(&categories, *item_id).ok_or_else(|| LedgerError::item_not_found(item_id))?;
        categories = set_amount(&categories, category_id, *item_id, amount)?;
    }
    for item_id in &args.disable {
        let (category_id, _) =
            find_item(&categories, *item_id).ok_or_else(|| LedgerError::item_not_found(item_id))?;
        categories = set_active(&categories, category_id, *item_id, false)?;
    }

    let report = BudgetOverviewReport::generate(
        &categories,
        &snapshot.income_sources,
        &settings.risk_thresholds,
    );

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        info!(path = %path.display(), "budget report exported");
        println!("Budget report exported to: {}", path.display());
    } else if args.at_risk {
        let at_risk = report.at_risk_categories();
        if at_risk.is_empty() {
            println!("No category is above the warn threshold.");
        }
        for row in at_risk {
            println!(
                "{:<24} {:>14} {:>7.1}% {}",
                row.name,
                row.total.format(&settings.money_format),
                row.utilization.unwrap_or_default(),
                row.risk.map(|r| r.to_string()).unwrap_or_default()
            );
        }
    } else {
        println!("{}", report.format_terminal(&settings.money_format));
    }

    Ok(())
}
