//! Entry form types.

use casa_shared::types::{CategoryId, PersonId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::TransactionKind;

/// New person form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    /// Display name.
    pub name: String,
    /// Age in years; required.
    pub age: Option<u32>,
}

/// New category form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Display label.
    pub label: String,
    /// Intended purpose.
    #[serde(default = "default_purpose")]
    pub purpose: TransactionKind,
}

/// New transaction form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Free-text description.
    pub description: String,
    /// Amount in BRL.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(default = "default_purpose")]
    pub kind: TransactionKind,
    /// Owning person.
    pub person_id: PersonId,
    /// Category.
    pub category_id: CategoryId,
}

// Both forms start on "Despesa".
fn default_purpose() -> TransactionKind {
    TransactionKind::Expense
}
