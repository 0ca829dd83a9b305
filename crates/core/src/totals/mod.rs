//! Financial totals for the dashboard and the per-person report.
//!
//! This module provides pure, stateless aggregation over loaded snapshots:
//! - Per-person income, expense and balance
//! - Aggregate totals across people or across all transactions
//! - Expenses grouped by category label for charting
//! - Data-quality audit of the loaded transactions

pub mod audit;
pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AggregationEngine;
pub use error::{AggregationError, DataIssue};
pub use types::*;
