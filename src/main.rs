use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use pocket_ledger::cli::{
    handle_budget_command, handle_dashboard_command, handle_export_command,
    handle_income_command, handle_reports_command, handle_transaction_command, BudgetArgs,
    DashboardArgs, ExportArgs, IncomeArgs, ReportsArgs, TransactionArgs,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::snapshot::Snapshot;
use pocket_ledger::utils::init_tracing;

#[derive(Parser)]
#[command(
    name = "pocket-ledger",
    version,
    about = "Budget, income and spending figures from the command line",
    long_about = "pocket-ledger totals a monthly household budget against income, \
                  queries transactions and summarises savings over time. Without a \
                  snapshot it runs on built-in sample data."
)]
struct Cli {
    /// Snapshot file to load (.json, .yaml or .yml)
    #[arg(long, global = true, env = "POCKET_LEDGER_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income, planned spending and the remaining buffer
    Dashboard(DashboardArgs),

    /// Budget overview by category
    Budget(BudgetArgs),

    /// Income sources and their monthly equivalents
    Income(IncomeArgs),

    /// Search, filter and sort transactions
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// Monthly trends, averages and savings goal progress
    Reports(ReportsArgs),

    /// Export the snapshot with its computed totals
    Export(ExportArgs),

    /// Write default settings and the sample snapshot
    Init,

    /// Show current configuration and paths
    Config,
}

/// Snapshot source in order of precedence: `--snapshot`, the settings file,
/// the snapshot in the config directory, then the built-in sample.
fn load_snapshot(cli_path: Option<PathBuf>, settings: &Settings, paths: &LedgerPaths) -> Result<Snapshot> {
    let path = cli_path
        .or_else(|| settings.snapshot_path.clone())
        .or_else(|| Some(paths.snapshot_file()).filter(|p| p.exists()));

    match path {
        Some(path) => Snapshot::load(&path)
            .with_context(|| format!("Failed to load snapshot {}", path.display())),
        None => {
            debug!("no snapshot configured, using sample data");
            Ok(Snapshot::sample())
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_dashboard_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Budget(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_budget_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Income(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_income_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Transactions(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_transaction_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Reports(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_reports_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            let snapshot = load_snapshot(cli.snapshot, &settings, &paths)?;
            handle_export_command(&snapshot, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing pocket-ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;

            let snapshot_file = paths.snapshot_file();
            if snapshot_file.exists() {
                println!("Keeping existing snapshot: {}", snapshot_file.display());
            } else {
                let contents = serde_json::to_string_pretty(&Snapshot::sample())?;
                std::fs::write(&snapshot_file, contents)
                    .with_context(|| format!("Failed to write {}", snapshot_file.display()))?;
                println!("Sample snapshot written to: {}", snapshot_file.display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot file:    {}", paths.snapshot_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!(
                "  Locale / currency: {} / {}",
                settings.money_format.locale,
                settings.money_format.currency.code()
            );
            println!(
                "  Risk thresholds:   warn > {}%, danger > {}%",
                settings.risk_thresholds.warn, settings.risk_thresholds.danger
            );
            println!(
                "  Buffer warning:    below {}",
                settings.dashboard_buffer_threshold.format(&settings.money_format)
            );
            match &settings.snapshot_path {
                Some(path) => println!("  Snapshot path:     {}", path.display()),
                None => println!("  Snapshot path:     (not set)"),
            }
        }
        None => {
            println!("pocket-ledger - budget, income and spending figures");
            println!();
            println!("Run 'pocket-ledger --help' for usage information.");
            println!("Run 'pocket-ledger dashboard' for an overview.");
        }
    }

    Ok(())
}
