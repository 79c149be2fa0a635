//! Storage layer for budget-planner
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod budget;
pub mod file_io;

pub use budget::{quarantine, BudgetStore, CorruptDataPolicy, DiscardedData, LoadedBudget};
pub use file_io::{read_json, write_atomic, write_json_atomic};
