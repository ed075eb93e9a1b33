//! Expense identifiers
//!
//! Ids are small positive integers so they can be typed at the delete prompt.
//! A new id is one past the largest id in the collection, never a position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first expense in an empty collection
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one; `u64::MAX` has no successor and stays put
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Next free id given the ids already in use
    pub fn next_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        ids.into_iter()
            .max()
            .map(|max| max.next())
            .unwrap_or(Self::FIRST)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Accept "#12" as printed in some listings
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_empty() {
        assert_eq!(ExpenseId::next_after(Vec::new()), ExpenseId::FIRST);
    }

    #[test]
    fn test_next_after_uses_max_not_count() {
        let ids = vec![ExpenseId::new(1), ExpenseId::new(7), ExpenseId::new(3)];
        assert_eq!(ExpenseId::next_after(ids), ExpenseId::new(8));
    }

    #[test]
    fn test_parse() {
        assert_eq!("12".parse::<ExpenseId>().unwrap(), ExpenseId::new(12));
        assert_eq!(" #4 ".parse::<ExpenseId>().unwrap(), ExpenseId::new(4));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ExpenseId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
