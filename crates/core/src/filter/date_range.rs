//! Inclusive date-range filter.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Transaction;
use crate::totals::AggregationError;

/// Optional inclusive window of calendar dates.
///
/// The start bound is `start 00:00:00 UTC`, the end bound `end 23:59:59 UTC`;
/// both are inclusive. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First included day.
    pub start: Option<NaiveDate>,
    /// Last included day.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates an unbounded range (matches everything).
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a range with both bounds.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Sets the start bound.
    #[must_use]
    pub const fn starting(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end bound.
    #[must_use]
    pub const fn ending(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Rejects ranges whose start day comes after their end day.
    ///
    /// Such a range is still usable (it matches nothing); callers that take
    /// ranges from user input reject it up front.
    pub fn validate(&self) -> Result<(), AggregationError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => {
                Err(AggregationError::InvalidDateRange { start, end })
            }
            _ => Ok(()),
        }
    }

    /// Lower bound as an instant.
    #[must_use]
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.start.map(|day| day.and_time(NaiveTime::MIN).and_utc())
    }

    /// Upper bound as an instant (`23:59:59`, whole second).
    #[must_use]
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|day| day.and_hms_opt(23, 59, 59))
            .map(|naive| naive.and_utc())
    }

    /// Returns true if the transaction falls inside the range.
    ///
    /// A transaction whose timestamp cannot be parsed only matches an
    /// unbounded range.
    #[must_use]
    pub fn contains(&self, transaction: &Transaction) -> bool {
        if self.is_unbounded() {
            return true;
        }
        transaction
            .timestamp
            .parse()
            .is_some_and(|instant| in_date_range(instant, self))
    }
}

/// Returns false if `timestamp` falls strictly outside either present bound.
#[must_use]
pub fn in_date_range(timestamp: DateTime<Utc>, range: &DateRange) -> bool {
    if range.lower_bound().is_some_and(|lower| timestamp < lower) {
        return false;
    }
    if range.upper_bound().is_some_and(|upper| timestamp > upper) {
        return false;
    }
    true
}
