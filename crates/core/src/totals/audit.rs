//! Data-quality audit of a loaded snapshot.

use std::collections::HashSet;

use casa_shared::types::{CategoryId, PersonId};

use super::engine::AggregationEngine;
use super::error::DataIssue;
use crate::model::{Category, Person, Transaction};

impl AggregationEngine {
    /// Lists the data-quality conditions found in `transactions`.
    ///
    /// A row without an owner is always reported. Other reference checks run
    /// only against the collections that were loaded; pass `None` to skip
    /// one. The audit never changes how totals are computed.
    #[must_use]
    pub fn audit_transactions(
        transactions: &[Transaction],
        people: Option<&[Person]>,
        categories: Option<&[Category]>,
    ) -> Vec<DataIssue> {
        let person_ids: Option<HashSet<PersonId>> =
            people.map(|people| people.iter().map(|p| p.id).collect());
        let category_ids: Option<HashSet<CategoryId>> =
            categories.map(|categories| categories.iter().map(|c| c.id).collect());

        let mut issues = Vec::new();
        for transaction in transactions {
            if transaction.timestamp.parse().is_none() {
                issues.push(DataIssue::MalformedTimestamp {
                    transaction_id: transaction.id,
                    raw: transaction.timestamp.as_str().to_string(),
                });
            }

            if !transaction.kind.is_recognized() {
                issues.push(DataIssue::UnrecognizedKind {
                    transaction_id: transaction.id,
                    raw: transaction.kind.to_string(),
                });
            }

            match transaction.person_id() {
                None => issues.push(DataIssue::MissingReference {
                    transaction_id: transaction.id,
                    entity: "person",
                    id: None,
                }),
                Some(id) => {
                    if let Some(ids) = &person_ids
                        && !ids.contains(&id)
                    {
                        issues.push(DataIssue::MissingReference {
                            transaction_id: transaction.id,
                            entity: "person",
                            id: Some(id.into_inner()),
                        });
                    }
                }
            }

            if let Some(ids) = &category_ids
                && !ids.contains(&transaction.category.id)
            {
                issues.push(DataIssue::MissingReference {
                    transaction_id: transaction.id,
                    entity: "category",
                    id: Some(transaction.category.id.into_inner()),
                });
            }
        }

        issues
    }
}
