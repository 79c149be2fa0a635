//! Category model
//!
//! A category holds a planned allocation and the expenses recorded against it.
//! Spent and remaining totals are derived on demand and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::money::Money;

/// Maximum category name length, in characters
pub const MAX_NAME_LEN: usize = 50;

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within a budget
    ///
    /// Missing in a persisted entry means "same as the map key".
    #[serde(default)]
    pub(crate) name: String,

    /// Amount planned for the month
    pub allocated_amount: Money,

    /// Expenses in the order they were recorded
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Category {
    /// Create a category with no expenses
    pub fn new(name: impl Into<String>, allocated_amount: Money) -> Self {
        Self {
            name: name.into(),
            allocated_amount,
            expenses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record an expense stamped with the current time
    pub fn add_expense(&mut self, amount: Money, description: impl AsRef<str>) -> &Expense {
        self.record_expense(Expense::new(amount, description))
    }

    /// Record a prebuilt expense
    pub fn record_expense(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    /// Total of all expense amounts
    pub fn spent(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Allocation minus spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.allocated_amount - self.spent()
    }

    /// Replace the allocation; existing expenses are untouched
    pub fn update_allocation(&mut self, new_amount: Money) {
        self.allocated_amount = new_amount;
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)
    }
}

/// Check a category name against the naming rules
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Category name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Housing", Money::from_units(1500));
        assert_eq!(category.name(), "Housing");
        assert_eq!(category.allocated_amount, Money::from_units(1500));
        assert!(category.expenses().is_empty());
        assert_eq!(category.spent(), Money::zero());
        assert_eq!(category.remaining(), Money::from_units(1500));
    }

    #[test]
    fn test_add_expense_keeps_order() {
        let mut category = Category::new("Transportation", Money::from_units(300));
        category.add_expense(Money::from_units(50), "Gas");
        category.add_expense(Money::from_units(30), "Parking");

        let descriptions: Vec<_> = category.expenses().iter().map(|e| e.description()).collect();
        assert_eq!(descriptions, vec!["Gas", "Parking"]);
        assert_eq!(category.spent(), Money::from_units(80));
        assert_eq!(category.remaining(), Money::from_units(220));
    }

    #[test]
    fn test_spent_is_exact_sum() {
        let mut category = Category::new("Food", Money::from_units(100));
        let amounts = [1999, 1, 333, -500, 10_000, 7];
        for cents in amounts {
            category.add_expense(Money::from_cents(cents), "item");
        }

        let expected: i64 = amounts.iter().sum();
        assert_eq!(category.spent().cents(), expected);
        assert_eq!(
            category.remaining(),
            category.allocated_amount - category.spent()
        );
    }

    #[test]
    fn test_overspend_is_negative_remaining() {
        let mut category = Category::new("Rent", Money::from_units(500));
        category.add_expense(Money::from_units(600), "Overspend");

        assert_eq!(category.remaining(), Money::from_units(-100));
        assert!(category.is_overspent());
    }

    #[test]
    fn test_refund_reduces_spent() {
        let mut category = Category::new("Shopping", Money::from_units(200));
        category.add_expense(Money::from_units(80), "Shoes");
        category.add_expense(Money::from_units(-30), "Refund");

        assert_eq!(category.spent(), Money::from_units(50));
    }

    #[test]
    fn test_update_allocation_keeps_expenses() {
        let mut category = Category::new("Entertainment", Money::from_units(200));
        category.add_expense(Money::from_units(75), "Movie tickets");

        category.update_allocation(Money::from_units(100));

        assert_eq!(category.allocated_amount, Money::from_units(100));
        assert_eq!(category.expenses().len(), 1);
        assert_eq!(category.remaining(), Money::from_units(25));

        category.update_allocation(Money::zero());
        assert_eq!(category.remaining(), Money::from_units(-75));
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Valid", Money::zero()).validate().is_ok());
        assert_eq!(
            Category::new("   ", Money::zero()).validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            Category::new("a".repeat(51), Money::zero()).validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_serialized_fields() {
        let category = Category::new("Utilities", Money::from_units(150));
        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["name"], "Utilities");
        assert_eq!(json["allocated_amount"], serde_json::json!(150.0));
        assert_eq!(json["expenses"], serde_json::json!([]));
    }
}
