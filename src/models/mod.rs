//! Core data models for tallybook
//!
//! This module contains the data structures that represent the tracker's
//! domain: transactions, month keys, categories, budgets, and money amounts.

pub mod budget;
pub mod category;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::MonthlyBudgets;
pub use category::{IncomeCategories, EXPENSE_CATEGORIES};
pub use money::Money;
pub use month::MonthKey;
pub use transaction::{Transaction, TransactionId, TransactionKind};
