//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing expenses. On disk an amount is a plain JSON number in currency
//! units, so `1500.0` is stored for fifteen hundred.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::BudgetError;

/// Largest accepted magnitude, in whole currency units.
///
/// Amounts are persisted as JSON floats, so every value in range (and every
/// derived total, which may reach twice this) has to stay exact well below
/// 2^53 hundredths.
const MAX_UNITS: i64 = 1_000_000_000_000;

/// Largest accepted magnitude, in cents.
const MAX_CENTS: i64 = MAX_UNITS * 100;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the amount lies within the accepted range
    pub const fn is_in_range(&self) -> bool {
        self.0 >= -MAX_CENTS && self.0 <= MAX_CENTS
    }

    /// Largest accepted amount
    pub const fn max_value() -> Self {
        Self(MAX_CENTS)
    }

    /// Add, returning `None` if the result leaves the accepted range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .filter(Self::is_in_range)
    }

    /// Sum amounts, returning `None` if the total leaves the accepted range
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        let total = amounts.into_iter().map(|m| i128::from(m.0)).sum::<i128>();
        i64::try_from(total).ok().map(Self).filter(Self::is_in_range)
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount in currency units as a float, for display and export only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts `"10"`, `"10.5"`, `"10.50"`, `"-10.50"`, `"$10.50"`,
    /// `"-$10.50"` and `"1,234.56"`. At most two fractional digits.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let (whole, frac) = rest.split_once('.').unwrap_or((rest.as_str(), ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let out_of_range = || MoneyParseError::OutOfRange(input.to_string());
        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Plain decimal form without symbol or grouping, e.g. `-1500.00`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().unsigned_abs(), self.cents_part())
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Accumulates wide so long lists cannot overflow part way through
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let total = iter.map(|m| i128::from(m.0)).sum::<i128>();
        Money(total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number with magnitude at most {}", MAX_UNITS)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        if v.unsigned_abs() > MAX_UNITS as u64 {
            return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
        }
        Ok(Money::from_units(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        match i64::try_from(v) {
            Ok(v) => self.visit_i64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() || v.abs() > MAX_UNITS as f64 {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        Ok(Money::from_cents((v * 100.0).round() as i64))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            Self::TooPrecise(s) => write!(f, "More than two decimal places: '{}'", s),
            Self::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        BudgetError::Validation(err.to_string())
    }
}
