//! Monthly budget goals
//!
//! A budget goal is a per-month expense ceiling used only for progress
//! display. Months without an entry have an implicit zero goal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;
use super::month::MonthKey;

/// Mapping from month key to budget goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyBudgets(BTreeMap<MonthKey, Money>);

impl MonthlyBudgets {
    /// Set (or overwrite) the goal for a month
    pub fn set(&mut self, month: MonthKey, amount: Money) {
        self.0.insert(month, amount);
    }

    /// Get the goal for a month; absent months have a zero goal
    pub fn goal_for(&self, month: MonthKey) -> Money {
        self.0.get(&month).copied().unwrap_or_default()
    }

    /// Iterate over all months with an explicit goal, in month order
    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, Money)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
