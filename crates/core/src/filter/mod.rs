//! Transaction and people filtering.
//!
//! - Inclusive calendar date ranges over transaction timestamps
//! - Case-insensitive name search over people

pub mod date_range;
pub mod search;

pub use date_range::{DateRange, in_date_range};
pub use search::{is_blank_query, matches_name_search};
