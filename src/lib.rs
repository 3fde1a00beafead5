//! tallybook - Local-only personal finance tracker
//!
//! This library provides the core functionality for tallybook: recording
//! income and expense transactions, tagging them with categories, setting a
//! monthly budget goal, and deriving a month-scoped summary (totals, balance,
//! per-category expense breakdown, budget progress).
//!
//! All state lives as JSON files in a per-user data directory. There is no
//! server and no account system.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, months, categories, budgets)
//! - `storage`: JSON key-value storage layer behind a backend trait
//! - `report`: Monthly summary aggregation and terminal rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use tallybook::storage::{FileBackend, Store};
//! use tallybook::report::MonthlySummary;
//!
//! let backend = FileBackend::new(paths.data_dir());
//! let store = Store::open(Box::new(backend))?;
//! let summary = MonthlySummary::generate(store.transactions(), month, store.budgets());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;

pub use error::TallyError;
