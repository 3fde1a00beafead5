//! Monthly summary aggregation
//!
//! Derives totals, balance, and the per-category expense breakdown for one
//! month from the full transaction list.

pub mod monthly;

pub use monthly::{CategoryTotal, MonthlySummary};
