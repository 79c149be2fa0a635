//! Core data models for budget-planner
//!
//! This module contains the in-memory budget: money amounts, expenses,
//! categories, the budget aggregate and its summary snapshot.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod policy;
pub mod summary;

pub use budget::Budget;
pub use category::{Category, CategoryValidationError};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use policy::AmountPolicy;
pub use summary::{BudgetSummary, CategorySummary};
