//! CSV Export functionality
//!
//! Exports every expense as one row, grouped by category in insertion order.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

const HEADER: [&str; 4] = ["Category", "Date", "Description", "Amount"];

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    category: &'a str,
    date: String,
    description: &'a str,
    amount: String,
}

/// Export all expenses to CSV; returns the number of rows written
pub fn export_expenses_csv<W: Write>(budget: &Budget, writer: W) -> BudgetResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    let mut count = 0;
    for category in budget.categories() {
        for expense in category.expenses() {
            csv_writer
                .serialize(ExpenseRecord {
                    category: category.name(),
                    date: expense.date().format("%Y-%m-%dT%H:%M:%S").to_string(),
                    description: expense.description(),
                    amount: expense.amount().to_decimal_string(),
                })
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            count += 1;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(count)
}
