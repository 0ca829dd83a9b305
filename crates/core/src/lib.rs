//! Core business logic for Casa.
//!
//! This crate contains pure business logic with ZERO network or web dependencies.
//! All domain types, filters, aggregations and entry rules live here.
//!
//! # Modules
//!
//! - `model` - People, categories, transactions and kind normalization
//! - `filter` - Date-range and name-search filters
//! - `totals` - Per-person, aggregate and per-category totals
//! - `entry` - Pre-checks for new records

pub mod entry;
pub mod filter;
pub mod model;
pub mod totals;

pub use filter::DateRange;
pub use totals::AggregationEngine;
