//! JSON Export functionality
//!
//! Exports the budget document together with its computed summary. The
//! budget fields sit at the top level, so an export can be loaded back as a
//! budget file.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, BudgetSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full budget export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub budget: &'a Budget,

    /// Totals at the time of export
    pub summary: BudgetSummary,
}

impl<'a> FullExport<'a> {
    pub fn new(budget: &'a Budget) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            budget,
            summary: budget.summary(),
        }
    }
}

/// Export the budget to JSON
pub fn export_full_json<W: Write>(budget: &Budget, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let export = FullExport::new(budget);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| BudgetError::Export(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))
}
