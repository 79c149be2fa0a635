//! Category display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format category details with its expenses
pub fn format_category_details(category: &Category, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name()));
    output.push_str(&format!(
        "  Allocated:  {}\n",
        category.allocated_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:      {}\n",
        category.spent().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:  {}{}\n",
        category.remaining().format_with_symbol(symbol),
        if category.is_overspent() { " (over budget)" } else { "" }
    ));
    output.push('\n');

    if category.expenses().is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let rows = category.expenses().iter().map(|e| ExpenseRow {
        date: e.date().format("%Y-%m-%d %H:%M").to_string(),
        description: e.description().to_string(),
        amount: e.amount().format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    output.push_str(&table.to_string());
    output.push('\n');

    output
}
