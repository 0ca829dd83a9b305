//! Household finance domain types.
//!
//! These are the read-only inputs of the aggregation engine:
//! - People (moradores)
//! - Categories
//! - Transactions, with their raw kind and timestamp as delivered upstream

pub mod kind;
pub mod types;

pub use kind::{KindValue, TransactionKind};
pub use types::{Category, CategoryRef, Person, PersonRef, Transaction, TransactionTimestamp};
