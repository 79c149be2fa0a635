//! YAML Export functionality
//!
//! Exports the budget to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::models::Budget;

/// Export the budget to YAML format
pub fn export_full_yaml<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::new(budget);
    let to_export_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Budget Planner Export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(&mut *writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    writer.flush().map_err(to_export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_yaml_export() {
        let mut budget = Budget::new();
        budget.set_income(Money::from_units(1000)).unwrap();
        budget.create_category("Transport", Money::from_units(120)).unwrap();
        budget.add_expense("Transport", Money::from_units(30), "Bus pass").unwrap();

        let mut buf = Vec::new();
        export_full_yaml(&budget, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("# Budget Planner Export"));
        assert!(output.contains("monthly_income: 1000.0"));
        assert!(output.contains("Transport:"));
        assert!(output.contains("description: Bus pass"));
    }
}
