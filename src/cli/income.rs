//! Income CLI commands
//!
//! Implements CLI commands for the monthly income.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{Budget, Money};
use crate::storage::BudgetStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly income and what is left to allocate
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    budget: &mut Budget,
    store: &BudgetStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse(&amount)?;
            budget.set_income(amount)?;
            store.save(budget)?;

            println!(
                "Monthly income set to {}",
                amount.format_with_symbol(symbol)
            );

            let unallocated = budget.unallocated();
            if unallocated.is_negative() {
                println!(
                    "Warning: allocations exceed income by {}",
                    unallocated.abs().format_with_symbol(symbol)
                );
            }
        }

        IncomeCommands::Show => {
            println!(
                "Monthly Income:  {}",
                budget.monthly_income().format_with_symbol(symbol)
            );
            println!(
                "Unallocated:     {}",
                budget.unallocated().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
