//! Transaction model
//!
//! A transaction is a single dated income or expense record. Transactions are
//! never edited in place: they are created once and later deleted (by id or
//! in bulk by month).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::money::Money;

/// Unique, stable, opaque transaction identifier
///
/// Assigned once at creation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single dated income or expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// When the transaction happened (serialized as ISO-8601)
    pub date: DateTime<Utc>,

    /// Optional free text
    #[serde(default)]
    pub description: String,

    /// Positive amount in currency-agnostic units
    pub amount: Money,

    /// Non-empty category label
    pub category: String,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id
    pub fn new(
        kind: TransactionKind,
        date: DateTime<Utc>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            date,
            description: String::new(),
            amount,
            category: category.into(),
        }
    }

    /// Set the free-text description, builder style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this is an income record
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense record
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}
