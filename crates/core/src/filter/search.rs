//! Name search over people.

use crate::model::Person;

/// Returns true if the query is empty or whitespace only.
#[must_use]
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring test of `query` within the person's name.
///
/// A blank query matches everyone. A non-blank query is used as typed,
/// surrounding spaces included.
#[must_use]
pub fn matches_name_search(person: &Person, query: &str) -> bool {
    if is_blank_query(query) {
        return true;
    }
    person.name.to_lowercase().contains(&query.to_lowercase())
}
