//! Sign rules for amounts entering the budget

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Which amounts may be negative
///
/// Negative expenses model refunds and corrections. Negative income and
/// allocations are rarely intended, but allocations are left open so a
/// category can be used to claw money back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPolicy {
    #[serde(default = "default_true")]
    pub allow_negative_expenses: bool,

    #[serde(default)]
    pub allow_negative_income: bool,

    #[serde(default = "default_true")]
    pub allow_negative_allocations: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AmountPolicy {
    fn default() -> Self {
        Self {
            allow_negative_expenses: true,
            allow_negative_income: false,
            allow_negative_allocations: true,
        }
    }
}

impl AmountPolicy {
    /// Reject every negative amount
    pub fn strict() -> Self {
        Self {
            allow_negative_expenses: false,
            allow_negative_income: false,
            allow_negative_allocations: false,
        }
    }

    /// Accept any amount
    pub fn permissive() -> Self {
        Self {
            allow_negative_expenses: true,
            allow_negative_income: true,
            allow_negative_allocations: true,
        }
    }

    pub fn check_income(&self, amount: Money) -> BudgetResult<()> {
        check(amount, self.allow_negative_income, "Monthly income")
    }

    pub fn check_allocation(&self, amount: Money) -> BudgetResult<()> {
        check(amount, self.allow_negative_allocations, "Allocated amount")
    }

    pub fn check_expense(&self, amount: Money) -> BudgetResult<()> {
        check(amount, self.allow_negative_expenses, "Expense amount")
    }
}

fn check(amount: Money, allow_negative: bool, what: &str) -> BudgetResult<()> {
    if !amount.is_in_range() {
        return Err(BudgetError::Validation(format!(
            "{} is out of range: {} (limit {})",
            what,
            amount,
            Money::max_value()
        )));
    }
    if amount.is_negative() && !allow_negative {
        return Err(BudgetError::Validation(format!(
            "{} cannot be negative: {}",
            what, amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = AmountPolicy::default();
        assert!(policy.check_expense(Money::from_units(-10)).is_ok());
        assert!(policy.check_allocation(Money::from_units(-10)).is_ok());

        let err = policy.check_income(Money::from_units(-10)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Monthly income cannot be negative: -$10.00"
        );
    }

    #[test]
    fn test_strict_rejects_negatives_only() {
        let policy = AmountPolicy::strict();
        assert!(policy.check_expense(Money::from_units(-1)).is_err());
        assert!(policy.check_allocation(Money::from_units(-1)).is_err());
        assert!(policy.check_income(Money::from_units(-1)).is_err());

        assert!(policy.check_expense(Money::zero()).is_ok());
        assert!(policy.check_allocation(Money::from_units(1)).is_ok());
    }

    #[test]
    fn test_permissive_accepts_negatives() {
        let policy = AmountPolicy::permissive();
        assert!(policy.check_income(Money::from_units(-1)).is_ok());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let policy: AmountPolicy =
            serde_json::from_str(r#"{"allow_negative_expenses": false}"#).unwrap();
        assert!(!policy.allow_negative_expenses);
        assert!(!policy.allow_negative_income);
        assert!(policy.allow_negative_allocations);
    }
}
