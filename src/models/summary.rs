//! Read-only snapshot of budget totals

use serde::Serialize;

use super::category::Category;
use super::money::Money;

/// Per-category totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
}

impl CategorySummary {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            allocated: category.allocated_amount,
            spent: category.spent(),
            remaining: category.remaining(),
        }
    }
}

/// Budget-wide totals plus one row per category, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub monthly_income: Money,
    pub total_allocated: Money,
    pub total_spent: Money,
    /// Income minus everything spent
    pub total_remaining: Money,
    /// Income not yet assigned to any category
    pub unallocated: Money,
    pub categories: Vec<CategorySummary>,
}

impl BudgetSummary {
    /// Categories whose spending exceeds their allocation
    pub fn overspent(&self) -> impl Iterator<Item = &CategorySummary> {
        self.categories.iter().filter(|c| c.is_overspent())
    }
}
