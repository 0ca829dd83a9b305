//! Domain data types.

use casa_shared::types::{CategoryId, PersonId, TransactionId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::kind::{KindValue, TransactionKind};

/// A registered person (morador).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person ID.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

/// A transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display label.
    pub label: String,
    /// Intended purpose. Informational only; never enforced by the engine.
    pub purpose: TransactionKind,
}

/// Person reference carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    /// Referenced person ID.
    pub id: PersonId,
    /// Denormalized name, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Denormalized age, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Category reference carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Referenced category ID.
    pub id: CategoryId,
    /// Denormalized label.
    pub label: String,
}

/// Transaction timestamp as received, parsed on demand.
///
/// A value that cannot be parsed is kept as-is so it can be reported; such a
/// transaction never falls inside a bounded date range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionTimestamp(pub String);

impl TransactionTimestamp {
    /// Parses the timestamp as an instant in UTC.
    ///
    /// Accepts RFC 3339 (`2024-01-05T12:00:00Z`), offset-less date-times
    /// (read as UTC, with or without fractional seconds) and bare dates
    /// (midnight UTC).
    #[must_use]
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DateTime<Utc>> for TransactionTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<&str> for TransactionTimestamp {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Free-text description.
    pub description: String,
    /// Non-negative amount in BRL.
    pub amount: Decimal,
    /// Kind exactly as delivered; see [`KindValue::classify`].
    pub kind: KindValue,
    /// Owning person; `None` when the upstream row has no owner.
    #[serde(default)]
    pub person: Option<PersonRef>,
    /// Category.
    pub category: CategoryRef,
    /// When the transaction happened.
    pub timestamp: TransactionTimestamp,
}

impl Transaction {
    /// Normalized kind of this transaction.
    #[must_use]
    pub fn kind(&self) -> TransactionKind {
        self.kind.classify()
    }

    /// ID of the owning person, if the row has one.
    #[must_use]
    pub fn person_id(&self) -> Option<PersonId> {
        self.person.as_ref().map(|person| person.id)
    }
}
