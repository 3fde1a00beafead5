//! Month key for scoping transactions and budgets
//!
//! A `MonthKey` identifies one calendar month and is the index into the
//! budget map. It serializes as a `"YYYY-MM"` string so it can be used as a
//! JSON object key.

use chrono::{DateTime, Datelike, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;

/// A calendar month (year + month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; returns None if month is not in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing the given instant
    pub fn containing(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether an instant falls within this month
    ///
    /// The last instant of the month is included; the first instant of the
    /// following month is not.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TallyError::Parse(format!("Invalid month key (expected YYYY-MM): {}", s));

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MonthKeyVisitor;

        impl Visitor<'_> for MonthKeyVisitor {
            type Value = MonthKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a month key in YYYY-MM form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MonthKey, E> {
                v.parse().map_err(|e: TallyError| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(MonthKeyVisitor)
    }
}
