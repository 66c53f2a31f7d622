//! Expense and budget categories
//!
//! A closed set of five categories shared by expense records and the
//! budget table. Both surfaces restrict selection to this set; there is
//! no free-text category entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A spending category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    /// Get the canonical name for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Food" => Ok(Category::Food),
            "Transport" => Ok(Category::Transport),
            "Utilities" => Ok(Category::Utilities),
            "Entertainment" => Ok(Category::Entertainment),
            "Other" => Ok(Category::Other),
            other => Err(TrackerError::Validation(format!(
                "Unknown category '{}'. Valid categories: Food, Transport, Utilities, Entertainment, Other.",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "Groceries".parse::<Category>();
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed: Category = "  Food ".parse().unwrap();
        assert_eq!(parsed, Category::Food);
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transport\"");

        let parsed: Category = serde_json::from_str("\"Entertainment\"").unwrap();
        assert_eq!(parsed, Category::Entertainment);
    }
}
