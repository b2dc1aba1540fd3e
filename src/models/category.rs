//! The closed category set
//!
//! Every expense belongs to exactly one category from a fixed set. Using an
//! enum (rather than a free string) means aggregation code that forgets a
//! category fails to compile.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category for an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// All categories in enumeration order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// Number of categories in the closed set
    pub const COUNT: usize = Self::ALL.len();

    /// Display name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Position in enumeration order, used to index breakdown tables
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), Category::COUNT);
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Transportation.to_string(), "Transportation");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("BILLS".parse::<Category>().unwrap(), Category::Bills);
        assert_eq!(" Shopping ".parse::<Category>().unwrap(), Category::Shopping);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");

        let deserialized: Category = serde_json::from_str("\"Bills\"").unwrap();
        assert_eq!(deserialized, Category::Bills);
    }
}
