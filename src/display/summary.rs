//! Budget summary display formatting
//!
//! Formats the budget totals and per-category rows for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::BudgetSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format the budget summary: totals followed by a category table
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    let totals = [
        ("Monthly Income", summary.monthly_income),
        ("Total Allocated", summary.total_allocated),
        ("Total Spent", summary.total_spent),
        ("Unallocated", summary.unallocated),
        ("Remaining Budget", summary.total_remaining),
    ];
    for (label, amount) in totals {
        output.push_str(&format!(
            "{:<18}{:>16}\n",
            format!("{}:", label),
            amount.format_with_symbol(symbol)
        ));
    }

    output.push('\n');

    if summary.categories.is_empty() {
        output.push_str("No categories yet.\n");
        output.push_str("Run 'budget category create <NAME> <AMOUNT>' to add one.\n");
        return output;
    }

    let rows = summary.categories.iter().map(|c| SummaryRow {
        name: c.name.clone(),
        allocated: c.allocated.format_with_symbol(symbol),
        spent: c.spent.format_with_symbol(symbol),
        remaining: c.remaining.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    output.push_str(&table.to_string());
    output.push('\n');

    let overspent: Vec<_> = summary.overspent().collect();
    if !overspent.is_empty() {
        output.push('\n');
        for category in overspent {
            output.push_str(&format!(
                "Warning: '{}' is over budget by {}\n",
                category.name,
                category.remaining.abs().format_with_symbol(symbol)
            ));
        }
    }

    output
}
