//! Storage layer for tallybook
//!
//! Three entities persist as independent JSON payloads in a key-value space:
//! the transaction list, the income category list, and the monthly budget
//! map. `Store` owns the in-memory copies and writes through to a
//! `StoreBackend` on every mutation.
//!
//! Loading never fails: a missing key gets the entity's default (which is
//! persisted immediately), and an unreadable or corrupt payload falls back to
//! the default with a logged warning. Corrupt state degrades to "start
//! fresh", not a crash.

pub mod backend;
pub mod file_io;

pub use backend::{FileBackend, MemoryBackend, StoreBackend};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::TallyResult;
use crate::models::{
    IncomeCategories, Money, MonthKey, MonthlyBudgets, Transaction, TransactionId, TransactionKind,
};

/// Key for the persisted transaction list
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key for the persisted income category list
pub const INCOME_CATEGORIES_KEY: &str = "incomeCategories";
/// Key for the persisted budget map
pub const MONTHLY_BUDGETS_KEY: &str = "monthlyBudgets";

/// Signature of the sample dataset shipped in early builds: a "Salary" income
/// of 5000 units. A stored list containing it is treated as leftover fixture
/// data and discarded on load. Known false-positive risk: a genuine entry
/// matching the signature wipes the list too.
const SAMPLE_CATEGORY: &str = "Salary";
const SAMPLE_AMOUNT: Money = Money::from_units(5000);

/// Owns the three persisted entities and writes through to a backend
pub struct Store {
    backend: Box<dyn StoreBackend>,
    transactions: Vec<Transaction>,
    income_categories: IncomeCategories,
    budgets: MonthlyBudgets,
}

impl Store {
    /// Load all entities from the backend
    ///
    /// Never fails: entities that are missing, unreadable, or corrupt start
    /// from their defaults, and the defaults are persisted back.
    pub fn open(backend: Box<dyn StoreBackend>) -> Self {
        let mut transactions: Vec<Transaction> =
            load_or_default(backend.as_ref(), TRANSACTIONS_KEY);

        if has_sample_data(&transactions) {
            warn!(
                key = TRANSACTIONS_KEY,
                "stored transactions match the sample dataset signature; resetting to empty"
            );
            transactions = Vec::new();
            persist_best_effort(backend.as_ref(), TRANSACTIONS_KEY, &transactions);
        }

        let income_categories = load_or_default(backend.as_ref(), INCOME_CATEGORIES_KEY);
        let budgets = load_or_default(backend.as_ref(), MONTHLY_BUDGETS_KEY);

        Self {
            backend,
            transactions,
            income_categories,
            budgets,
        }
    }

    /// The full transaction list, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The income category list
    pub fn income_categories(&self) -> &IncomeCategories {
        &self.income_categories
    }

    /// The budget map
    pub fn budgets(&self) -> &MonthlyBudgets {
        &self.budgets
    }

    /// Append a transaction with a freshly generated id
    ///
    /// Amount and category validation belong to the input layer; the store
    /// persists what it is given. A new income category introduced here is
    /// registered in the income category list.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        date: DateTime<Utc>,
        amount: Money,
        category: &str,
        description: &str,
    ) -> TallyResult<Transaction> {
        let txn = Transaction::new(kind, date, amount, category).with_description(description);

        self.transactions.push(txn.clone());
        self.persist(TRANSACTIONS_KEY, &self.transactions)?;

        if kind == TransactionKind::Income && self.income_categories.add(category) {
            self.persist(INCOME_CATEGORIES_KEY, &self.income_categories)?;
        }

        Ok(txn)
    }

    /// Remove the transaction with the given id; no-op if absent
    ///
    /// Returns true if an entry was removed.
    pub fn delete_transaction(&mut self, id: TransactionId) -> TallyResult<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);

        if self.transactions.len() == before {
            return Ok(false);
        }

        self.persist(TRANSACTIONS_KEY, &self.transactions)?;
        Ok(true)
    }

    /// Remove every transaction dated within the given month
    ///
    /// Entries outside that month are untouched. Returns the number removed.
    pub fn clear_month(&mut self, month: MonthKey) -> TallyResult<usize> {
        let before = self.transactions.len();
        self.transactions.retain(|t| !month.contains(t.date));

        let removed = before - self.transactions.len();
        if removed > 0 {
            self.persist(TRANSACTIONS_KEY, &self.transactions)?;
        }
        Ok(removed)
    }

    /// Append an income category if absent; returns true if it was added
    pub fn add_income_category(&mut self, name: &str) -> TallyResult<bool> {
        if !self.income_categories.add(name) {
            return Ok(false);
        }
        self.persist(INCOME_CATEGORIES_KEY, &self.income_categories)?;
        Ok(true)
    }

    /// Set (or overwrite) the budget goal for a month
    pub fn set_budget(&mut self, month: MonthKey, amount: Money) -> TallyResult<()> {
        self.budgets.set(month, amount);
        self.persist(MONTHLY_BUDGETS_KEY, &self.budgets)
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> TallyResult<()> {
        let payload = serde_json::to_string_pretty(value)?;
        self.backend.write(key, &payload)
    }
}

/// Detect the pre-seeded example dataset from early builds
fn has_sample_data(transactions: &[Transaction]) -> bool {
    transactions
        .iter()
        .any(|t| t.category == SAMPLE_CATEGORY && t.amount == SAMPLE_AMOUNT)
}

/// Load one entity, degrading to its default on any failure
///
/// A missing key persists and returns the default. Unreadable storage or a
/// payload that fails to decode logs a warning and falls back to the default,
/// persisting it so the next load is clean.
fn load_or_default<T>(backend: &dyn StoreBackend, key: &str) -> T
where
    T: DeserializeOwned + Serialize + Default,
{
    let payload = match backend.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            let value = T::default();
            persist_best_effort(backend, key, &value);
            return value;
        }
        Err(e) => {
            warn!(key, error = %e, "storage unavailable; starting from default");
            let value = T::default();
            persist_best_effort(backend, key, &value);
            return value;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored payload is corrupt; starting from default");
            let value = T::default();
            persist_best_effort(backend, key, &value);
            value
        }
    }
}

fn persist_best_effort<T: Serialize>(backend: &dyn StoreBackend, key: &str, value: &T) {
    let payload = match serde_json::to_string_pretty(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(key, error = %e, "failed to serialize default");
            return;
        }
    };
    if let Err(e) = backend.write(key, &payload) {
        warn!(key, error = %e, "failed to persist default");
    }
}
