//! Budget aggregate
//!
//! The budget owns the monthly income and every category (and, through them,
//! every expense). All mutations go through here so that category names stay
//! unique and amount rules are applied in one place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::Category;
use super::expense::Expense;
use super::money::Money;
use super::policy::AmountPolicy;
use super::summary::{BudgetSummary, CategorySummary};
use crate::error::{BudgetError, BudgetResult};

/// A month's income and its categories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    monthly_income: Money,

    /// Persisted as a map keyed by name; kept as a Vec for insertion order
    #[serde(default, with = "category_map")]
    categories: Vec<Category>,

    #[serde(skip)]
    policy: AmountPolicy,
}

impl Budget {
    /// Create an empty budget: no income, no categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty budget with custom amount rules
    pub fn with_policy(policy: AmountPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &AmountPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: AmountPolicy) {
        self.policy = policy;
    }

    pub fn monthly_income(&self) -> Money {
        self.monthly_income
    }

    /// Replace the monthly income
    pub fn set_income(&mut self, amount: Money) -> BudgetResult<()> {
        self.policy.check_income(amount)?;
        debug!(income = %amount, "set monthly income");
        self.monthly_income = amount;
        Ok(())
    }

    /// Create a new category; the allocation defaults to zero
    ///
    /// The name is trimmed. Names are case-sensitive, so "food" and "Food"
    /// are different categories.
    pub fn create_category(
        &mut self,
        name: &str,
        allocated_amount: impl Into<Option<Money>>,
    ) -> BudgetResult<&Category> {
        let name = name.trim();
        let allocated_amount = allocated_amount.into().unwrap_or_default();

        let category = Category::new(name, allocated_amount);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if self.position(name).is_some() {
            return Err(BudgetError::duplicate_category(name));
        }

        self.policy.check_allocation(allocated_amount)?;
        within_limit(
            "Total allocated",
            self.total_allocated().checked_add(allocated_amount),
        )?;

        debug!(category = name, allocated = %allocated_amount, "created category");
        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Replace a category's allocation
    pub fn update_category_allocation(&mut self, name: &str, new_amount: Money) -> BudgetResult<()> {
        let index = self.require(name)?;
        self.policy.check_allocation(new_amount)?;
        let others = self.total_allocated() - self.categories[index].allocated_amount;
        within_limit("Total allocated", others.checked_add(new_amount))?;

        debug!(category = name, allocated = %new_amount, "updated allocation");
        self.categories[index].update_allocation(new_amount);
        Ok(())
    }

    /// Remove a category together with all of its expenses
    pub fn delete_category(&mut self, name: &str) -> BudgetResult<Category> {
        let index = self.require(name)?;
        let removed = self.categories.remove(index);
        debug!(
            category = name,
            expenses = removed.expenses().len(),
            "deleted category"
        );
        Ok(removed)
    }

    /// Record an expense, stamped with the current time, against a category
    pub fn add_expense(
        &mut self,
        category_name: &str,
        amount: Money,
        description: &str,
    ) -> BudgetResult<&Expense> {
        self.record_expense(category_name, Expense::new(amount, description))
    }

    /// Record a prebuilt expense against a category
    pub fn record_expense(&mut self, category_name: &str, expense: Expense) -> BudgetResult<&Expense> {
        let index = self.require(category_name)?;
        let amount = expense.amount();
        self.policy.check_expense(amount)?;
        within_limit(
            "Category spending",
            self.categories[index].spent().checked_add(amount),
        )?;
        within_limit("Total spent", self.total_spent().checked_add(amount))?;

        debug!(category = category_name, amount = %amount, "added expense");
        Ok(self.categories[index].record_expense(expense))
    }

    /// Look up a category by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_allocated(&self) -> Money {
        self.categories.iter().map(|c| c.allocated_amount).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.categories.iter().map(Category::spent).sum()
    }

    /// Income minus total spent
    pub fn total_remaining(&self) -> Money {
        self.monthly_income - self.total_spent()
    }

    /// Income minus total allocated
    pub fn unallocated(&self) -> Money {
        self.monthly_income - self.total_allocated()
    }

    /// Snapshot of every total; has no side effects
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            monthly_income: self.monthly_income,
            total_allocated: self.total_allocated(),
            total_spent: self.total_spent(),
            total_remaining: self.total_remaining(),
            unallocated: self.unallocated(),
            categories: self.categories.iter().map(CategorySummary::from).collect(),
        }
    }

    /// Check that every derived total stays within the accepted money range
    ///
    /// Mutations keep this true; a document read from disk may not.
    pub fn verify_totals(&self) -> BudgetResult<()> {
        let out_of_range = |what: &str| {
            BudgetError::CorruptData(format!(
                "{} exceeds the supported limit of {}",
                what,
                Money::max_value()
            ))
        };

        if Money::checked_sum(self.categories.iter().map(|c| c.allocated_amount)).is_none() {
            return Err(out_of_range("Total allocated"));
        }
        for category in &self.categories {
            if Money::checked_sum(category.expenses().iter().map(Expense::amount)).is_none() {
                return Err(out_of_range(&format!("Spending in '{}'", category.name())));
            }
        }
        let all_expenses = self
            .categories
            .iter()
            .flat_map(|c| c.expenses().iter().map(Expense::amount));
        if Money::checked_sum(all_expenses).is_none() {
            return Err(out_of_range("Total spent"));
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn require(&self, name: &str) -> BudgetResult<usize> {
        self.position(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }
}

fn within_limit(what: &str, total: Option<Money>) -> BudgetResult<Money> {
    total.ok_or_else(|| {
        BudgetError::Validation(format!(
            "{} would exceed the supported limit of {}",
            what,
            Money::max_value()
        ))
    })
}

// Equality covers persisted state only; the amount policy is configuration.
impl PartialEq for Budget {
    fn eq(&self, other: &Self) -> bool {
        self.monthly_income == other.monthly_income && self.categories == other.categories
    }
}

impl Eq for Budget {}

mod category_map {
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    use crate::models::category::Category;

    pub fn serialize<S: Serializer>(
        categories: &[Category],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(categories.len()))?;
        for category in categories {
            map.serialize_entry(category.name(), category)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Category>, D::Error> {
        deserializer.deserialize_map(CategoryMapVisitor)
    }

    struct CategoryMapVisitor;

    impl<'de> Visitor<'de> for CategoryMapVisitor {
        type Value = Vec<Category>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category names to categories")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut categories: Vec<Category> = Vec::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((key, mut category)) = access.next_entry::<String, Category>()? {
                if key.trim().is_empty() {
                    return Err(de::Error::custom("category with an empty name"));
                }
                if category.name.is_empty() {
                    category.name = key.clone();
                } else if category.name != key {
                    return Err(de::Error::custom(format!(
                        "category key '{}' does not match its name '{}'",
                        key, category.name
                    )));
                }
                if categories.iter().any(|c| c.name() == key) {
                    return Err(de::Error::custom(format!("duplicate category '{}'", key)));
                }
                categories.push(category);
            }

            Ok(categories)
        }
    }
}
