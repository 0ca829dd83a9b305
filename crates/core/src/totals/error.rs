//! Aggregation error types.

use casa_shared::AppError;
use casa_shared::types::TransactionId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that reject an aggregation request outright.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<AggregationError> for AppError {
    fn from(err: AggregationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Data-quality conditions found in a loaded snapshot.
///
/// None of these abort a computation; they only describe how a transaction
/// was treated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIssue {
    /// Timestamp could not be parsed; excluded from date-bounded views.
    #[error("Transaction {transaction_id} has a malformed timestamp: {raw:?}")]
    MalformedTimestamp {
        /// Offending transaction.
        transaction_id: TransactionId,
        /// Raw timestamp text.
        raw: String,
    },

    /// Referenced person or category is absent or not in the loaded collection.
    #[error("Transaction {transaction_id} references unknown {entity} {}", reference_label(.id))]
    MissingReference {
        /// Offending transaction.
        transaction_id: TransactionId,
        /// `"person"` or `"category"`.
        entity: &'static str,
        /// Referenced id; `None` when the row carries no reference at all.
        id: Option<i64>,
    },

    /// Kind is neither a known tag nor a known code; counted as an expense.
    #[error("Transaction {transaction_id} has unrecognized kind {raw}, counted as expense")]
    UnrecognizedKind {
        /// Offending transaction.
        transaction_id: TransactionId,
        /// Raw kind, rendered.
        raw: String,
    },
}

#[allow(clippy::ref_option)]
fn reference_label(id: &Option<i64>) -> String {
    id.map_or_else(|| "(none)".to_string(), |id| id.to_string())
}
