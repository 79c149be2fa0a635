//! Expense model
//!
//! An expense is an immutable record of money spent against a category.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single expense recorded against a category
///
/// `date` is a local timestamp without an offset; it is written as
/// ISO-8601 (`2025-01-15T10:30:00.123456`) and never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    amount: Money,

    #[serde(default)]
    description: String,

    date: NaiveDateTime,
}

impl Expense {
    /// Create an expense stamped with the current local time
    pub fn new(amount: Money, description: impl AsRef<str>) -> Self {
        Self::with_date(amount, description, Local::now().naive_local())
    }

    /// Create an expense with an explicit timestamp
    pub fn with_date(amount: Money, description: impl AsRef<str>, date: NaiveDateTime) -> Self {
        Self {
            amount,
            description: description.as_ref().trim().to_string(),
            date,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}
