//! Client for the household API.
//!
//! This crate provides:
//! - The `HouseholdApi` trait the dashboard depends on
//! - `ApiClient`, its reqwest implementation
//! - Decoding of the `{dados, mensagem}` envelope
//! - Concurrent loading of people and transactions

pub mod client;
pub mod error;
pub mod source;
mod wire;

pub use client::ApiClient;
pub use error::ClientError;
pub use source::{HouseholdApi, Snapshot, load_snapshot};
