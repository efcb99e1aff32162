use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    connect, handle_budget_command, handle_expense_command, run_summary, run_watch,
    BudgetCommands, ExpenseCommands,
};
use spendwise::config::{SpendwisePaths, Settings};
use spendwise::sync::SyncEngine;
use spendwise::telemetry;

#[derive(Parser)]
#[command(
    name = "spendwise",
    author = "Kaylee Beyene",
    version,
    about = "Track expenses and budgets against a remote service",
    long_about = "Spendwise keeps your expenses and budgets on a remote service. \
                  When the service is unreachable it keeps working on local data \
                  and tells you the change was not saved."
)]
struct Cli {
    /// Base URL of the remote service
    #[arg(long, global = true, env = "SPENDWISE_API_URL")]
    api_url: Option<String>,

    /// Budget alert threshold as a fraction (e.g., 0.8)
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, recent expenses and current alerts
    Summary,

    /// Stay running and print reminders and budget alerts
    Watch,

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let paths = SpendwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(cli.api_url, cli.threshold)?;

    let command = match cli.command {
        Some(Commands::Config { save }) => {
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:     {}", settings.api_base_url);
            println!("  Budget threshold: {}", settings.budget_threshold);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            if save {
                settings.save(&paths)?;
                println!();
                println!("Saved settings to {}", paths.settings_file().display());
            }
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("Spendwise - expense and budget tracking");
            println!();
            println!("Run 'spendwise --help' for usage information.");
            println!("Run 'spendwise summary' for an overview.");
            return Ok(());
        }
    };

    let remote = connect(&settings)?;

    if let Commands::Watch = command {
        run_watch(remote, &settings).await?;
        return Ok(());
    }

    let engine = SyncEngine::new(remote);
    let loaded = engine.fetch_all().await;
    if let Some(cause) = loaded.cause() {
        eprintln!(
            "Warning: failed to fetch data from {} ({}); using default data instead.",
            settings.api_base_url, cause
        );
    }

    match command {
        Commands::Expense(cmd) => handle_expense_command(&engine, &settings, cmd).await?,
        Commands::Budget(cmd) => handle_budget_command(&engine, &settings, cmd).await?,
        Commands::Summary => run_summary(&engine, &settings)?,
        Commands::Watch | Commands::Config { .. } => {}
    }

    Ok(())
}
