//! Category CLI commands
//!
//! Implements CLI commands for creating, re-allocating, inspecting and
//! deleting budget categories.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_category_details;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};
use crate::storage::BudgetStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Create {
        /// Category name (case-sensitive)
        name: String,
        /// Allocated amount (defaults to 0)
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Change how much is allocated to a category
    Allocate {
        /// Category name
        name: String,
        /// New allocated amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show a category and its expenses
    Show {
        /// Category name
        name: String,
    },

    /// Delete a category and all of its expenses
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    budget: &mut Budget,
    store: &BudgetStore,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::Create { name, amount } => {
            let amount = amount.as_deref().map(Money::parse).transpose()?;
            let category = budget.create_category(&name, amount)?;
            let created = format!(
                "Created category '{}' with {} allocated",
                category.name(),
                category.allocated_amount.format_with_symbol(symbol)
            );
            store.save(budget)?;
            println!("{}", created);
        }

        CategoryCommands::Allocate { name, amount } => {
            let amount = Money::parse(&amount)?;
            budget.update_category_allocation(&name, amount)?;
            store.save(budget)?;
            println!(
                "Category '{}' allocation set to {}",
                name,
                amount.format_with_symbol(symbol)
            );
        }

        CategoryCommands::Show { name } => {
            let category = budget
                .category(&name)
                .ok_or_else(|| BudgetError::category_not_found(&name))?;
            print!("{}", format_category_details(category, symbol));
        }

        CategoryCommands::Delete { name } => {
            let removed = budget.delete_category(&name)?;
            store.save(budget)?;
            println!(
                "Deleted category '{}' ({} expenses removed)",
                removed.name(),
                removed.expenses().len()
            );
        }
    }

    Ok(())
}
