//! Category definitions
//!
//! Expense categories are a fixed set; income categories start from a seeded
//! list and grow as the user introduces new ones through transaction entry.

use serde::{Deserialize, Serialize};

/// The fixed set of expense categories
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Housing",
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Health",
    "Other",
];

/// User-extensible, ordered set of income category names
///
/// Starts with the seeded defaults and grows by append-if-absent; it never
/// shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomeCategories(Vec<String>);

impl IncomeCategories {
    /// Check whether a category is already present
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Append a category if absent; returns true if it was added
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Iterate over the category names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IncomeCategories {
    fn default() -> Self {
        Self(
            ["Salary", "Freelance", "Investment", "Other"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}
