//! Export functionality for budget-planner
//!
//! Supports exporting the budget to multiple formats:
//! - CSV: one row per expense, for spreadsheets
//! - JSON: full document plus summary, machine-readable
//! - YAML: full document plus summary, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
