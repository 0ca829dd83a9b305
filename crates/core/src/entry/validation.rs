//! Entry validation rules.

use rust_decimal::Decimal;

use super::error::EntryError;
use super::types::{NewCategory, NewPerson, NewTransaction};
use crate::model::{Category, Person, TransactionKind};

/// Age from which a person may record income.
pub const ADULT_AGE: u32 = 18;

/// Checks a new person form.
pub fn validate_person(input: &NewPerson) -> Result<(), EntryError> {
    if input.name.trim().is_empty() {
        return Err(EntryError::MissingField("nome"));
    }
    if input.age.is_none() {
        return Err(EntryError::MissingField("idade"));
    }
    Ok(())
}

/// Checks a new category form.
pub fn validate_category(input: &NewCategory) -> Result<(), EntryError> {
    if input.label.trim().is_empty() {
        return Err(EntryError::MissingField("descricao"));
    }
    Ok(())
}

/// Checks a new transaction form against the loaded people and categories.
///
/// Returns the owning person so the caller can log or echo it.
pub fn validate_transaction<'a>(
    input: &NewTransaction,
    people: &'a [Person],
    categories: &[Category],
) -> Result<&'a Person, EntryError> {
    if input.description.trim().is_empty() {
        return Err(EntryError::MissingField("descricao"));
    }
    if input.amount <= Decimal::ZERO {
        return Err(EntryError::NonPositiveAmount);
    }

    let person = people
        .iter()
        .find(|p| p.id == input.person_id)
        .ok_or(EntryError::UnknownPerson(input.person_id))?;

    if !categories.iter().any(|c| c.id == input.category_id) {
        return Err(EntryError::UnknownCategory(input.category_id));
    }

    if input.kind == TransactionKind::Income && person.age < ADULT_AGE {
        return Err(EntryError::MinorIncome {
            name: person.name.clone(),
        });
    }

    Ok(person)
}
