//! Entry error types.
//!
//! Messages are shown to the user as-is in the dashboard flash notification.

use casa_shared::AppError;
use casa_shared::types::{CategoryId, PersonId};
use thiserror::Error;

/// Reasons a new record is rejected before reaching the household API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// A required field is empty.
    #[error("Campo obrigatório: {0}")]
    MissingField(&'static str),

    /// Amount must be greater than zero.
    #[error("O valor deve ser maior que zero.")]
    NonPositiveAmount,

    /// Referenced person does not exist.
    #[error("Morador não encontrado: {0}")]
    UnknownPerson(PersonId),

    /// Referenced category does not exist.
    #[error("Categoria não encontrada: {0}")]
    UnknownCategory(CategoryId),

    /// Minors cannot record income.
    #[error("Operação negada: {name} é menor de idade.")]
    MinorIncome {
        /// Name of the person.
        name: String,
    },
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::MinorIncome { .. } => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_income_is_a_business_rule() {
        let app: AppError = EntryError::MinorIncome {
            name: "Beto".into(),
        }
        .into();
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.message(), "Operação negada: Beto é menor de idade.");
    }

    #[test]
    fn test_form_errors_are_validation_errors() {
        let app: AppError = EntryError::MissingField("nome").into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "Campo obrigatório: nome");
    }
}
