use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_category_command, handle_expense_command, handle_export_command, handle_income_command,
    CategoryCommands, ExpenseCommands, ExportFormat, IncomeCommands,
};
use budget_planner::config::{paths::BudgetPaths, settings::Settings};
use budget_planner::display::format_summary;
use budget_planner::logger;
use budget_planner::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly income and category budget tracker",
    long_about = "Budget Planner splits your monthly income into named categories, \
                  records expenses against them and shows what is left, both per \
                  category and overall."
)]
struct Cli {
    /// Budget file to use instead of the default location
    #[arg(short, long, global = true, env = "BUDGET_PLANNER_FILE")]
    file: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show the budget summary
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the budget to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short = 'F', long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let budget_file = cli.file.clone().unwrap_or_else(|| paths.budget_file());
    let store = BudgetStore::new(budget_file)
        .with_corrupt_policy(settings.on_corrupt_data)
        .with_amount_policy(settings.amount_policy);

    let loaded = store.load()?;
    if let Some(discarded) = &loaded.discarded {
        eprintln!("Warning: {}", discarded.error);
        eprintln!(
            "The unreadable file was moved to {}. Starting with an empty budget.",
            discarded.moved_to.display()
        );
    }
    let mut budget = loaded.budget;

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut budget, &store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut budget, &store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut budget, &store, &settings, cmd)?;
        }
        Some(Commands::Summary { json }) => {
            let summary = budget.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_summary(&summary, &settings.currency_symbol));
            }
        }
        Some(Commands::Export { output, format }) => {
            handle_export_command(&budget, &output, format)?;
        }
        Some(Commands::Config) => {
            // Write the defaults out once so there is a file to edit
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Budget Planner Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Budget file:      {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:            {}", settings.currency_symbol);
            println!(
                "  Negative expenses allowed:  {}",
                settings.amount_policy.allow_negative_expenses
            );
            println!(
                "  Negative income allowed:    {}",
                settings.amount_policy.allow_negative_income
            );
            println!(
                "  Negative allocations allowed: {}",
                settings.amount_policy.allow_negative_allocations
            );
            println!("  On corrupt budget file:     {:?}", settings.on_corrupt_data);
        }
        None => {
            println!("Budget Planner - monthly income and category budgeting");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget summary' to see where your money stands.");
        }
    }

    Ok(())
}
