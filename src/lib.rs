//! budget-planner - monthly income and category budget tracker
//!
//! This library holds a month's income, a set of named categories with
//! allocated amounts, and the expenses recorded against each category. It
//! derives spent, remaining and unallocated totals and persists the whole
//! budget as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, expenses, categories, the budget aggregate and its summary
//! - `storage`: Atomic JSON persistence and corrupt-file handling
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_planner::models::{Budget, Money};
//!
//! # fn main() -> budget_planner::BudgetResult<()> {
//! let mut budget = Budget::load("budget_data.json")?;
//! budget.set_income(Money::from_units(5000))?;
//! budget.create_category("Food", Money::from_units(600))?;
//! budget.add_expense("Food", Money::from_units(75), "Groceries")?;
//! println!("Unallocated: {}", budget.summary().unallocated);
//! budget.save("budget_data.json")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use models::{Budget, BudgetSummary, Category, Expense, Money};
