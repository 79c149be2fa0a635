//! Expense CLI commands

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Expense, Money};
use crate::storage::BudgetStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a category
    Add {
        /// Category name
        category: String,
        /// Amount spent (negative for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        date: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    budget: &mut Budget,
    store: &BudgetStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
            date,
        } => {
            let amount = Money::parse(&amount)?;
            let expense = match date {
                Some(date) => Expense::with_date(amount, &description, parse_date(&date)?),
                None => Expense::new(amount, &description),
            };

            budget.record_expense(&category, expense)?;
            store.save(budget)?;

            println!(
                "Added expense of {} to '{}'",
                amount.format_with_symbol(symbol),
                category
            );

            if let Some(cat) = budget.category(&category) {
                let remaining = cat.remaining();
                if remaining.is_negative() {
                    println!(
                        "Warning: '{}' is over budget by {}",
                        category,
                        remaining.abs().format_with_symbol(symbol)
                    );
                } else {
                    println!("Remaining in '{}': {}", category, remaining.format_with_symbol(symbol));
                }
            }
        }
    }

    Ok(())
}

/// Parse a date or date-time given on the command line
pub fn parse_date(input: &str) -> BudgetResult<NaiveDateTime> {
    let input = input.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::default()))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                input
            ))
        })
}
