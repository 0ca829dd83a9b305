//! Pre-checks for new people, categories and transactions.
//!
//! The household API owns validation; these rules only stop obviously
//! invalid forms before a request is sent.

pub mod error;
pub mod types;
pub mod validation;

pub use error::EntryError;
pub use types::{NewCategory, NewPerson, NewTransaction};
pub use validation::{ADULT_AGE, validate_category, validate_person, validate_transaction};
