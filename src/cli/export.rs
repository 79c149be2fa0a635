//! CLI command for data export

use clap::ValueEnum;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::models::Budget;
use crate::storage::write_atomic;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full budget plus summary)
    Json,
    /// YAML format (full budget plus summary, human-readable)
    Yaml,
}

/// Handle the export command
///
/// The output file is replaced atomically, so a failed export never leaves
/// a truncated file behind.
pub fn handle_export_command(budget: &Budget, output: &Path, format: ExportFormat) -> BudgetResult<()> {
    let mut count = 0;
    write_atomic(output, |writer| match format {
        ExportFormat::Csv => {
            count = export_expenses_csv(budget, writer)?;
            Ok(())
        }
        ExportFormat::Json => export_full_json(budget, writer, true),
        ExportFormat::Yaml => export_full_yaml(budget, writer),
    })
    .map_err(|e| match e {
        BudgetError::Storage(msg) => {
            BudgetError::Export(format!("Failed to write {}: {}", output.display(), msg))
        }
        other => other,
    })?;

    match format {
        ExportFormat::Csv => println!("Exported {} expenses to: {}", count, output.display()),
        ExportFormat::Json | ExportFormat::Yaml => {
            println!("Budget exported to: {}", output.display())
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn sample_budget() -> Budget {
        let mut budget = Budget::new();
        budget.set_income(Money::from_units(800)).unwrap();
        budget.create_category("Food", Money::from_units(200)).unwrap();
        budget.add_expense("Food", Money::from_units(15), "Lunch").unwrap();
        budget
    }

    #[test]
    fn test_export_each_format() {
        let temp_dir = TempDir::new().unwrap();
        let budget = sample_budget();

        for (format, name) in [
            (ExportFormat::Csv, "out.csv"),
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Yaml, "out.yaml"),
        ] {
            let path = temp_dir.path().join(name);
            handle_export_command(&budget, &path, format).unwrap();
            assert!(fs::read_to_string(&path).unwrap().contains("Food"));
        }
    }

    #[test]
    fn test_failed_export_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "earlier export").unwrap();

        // A directory on the temp path makes the write fail
        fs::create_dir(temp_dir.path().join("out.json.tmp")).unwrap();
        let err = handle_export_command(&sample_budget(), &path, ExportFormat::Json).unwrap_err();

        assert!(matches!(err, BudgetError::Export(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier export");
    }
}
