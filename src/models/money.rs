//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number with two decimals
//! (`12.5` for $12.50).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Largest amount a single expense may carry: $1,000,000,000.00
    ///
    /// Sums of many maximal amounts still fit comfortably in an i64.
    pub const MAX: Money = Money(100_000_000_000);

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating-point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build an amount from floating-point currency units, rounding to the cent
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate cents to 2 digits
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|total| *total <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::TooLarge(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through the formatter so `{:>12}` works in table layouts
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        if value.abs() > Self::MAX.as_f64() {
            return Err(serde::de::Error::custom(format!(
                "amount {} exceeds the maximum of {}",
                value,
                Self::MAX
            )));
        }
        Ok(Self::from_f64(value))
    }
}

// Totals saturate instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount {} exceeds the maximum of {}", s, Money::MAX)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "   $0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 7.5 ").unwrap().cents(), 750);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_over_max() {
        assert_eq!(Money::parse("1000000000").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("1000000000.01"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758"),
            Err(MoneyParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let huge = Money::from_cents(i64::MAX - 1);
        let total: Money = [huge, huge, Money::from_cents(5)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut running = huge;
        running += huge;
        assert_eq!(running.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_as_decimal_number() {
        let m = Money::from_cents(1250);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("7").unwrap();
        assert_eq!(from_int.cents(), 700);
    }

    #[test]
    fn test_deserialize_rejects_amounts_over_max() {
        assert!(serde_json::from_str::<Money>("1000000000").is_ok());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("-1e19").is_err());
    }
}
