//! API route definitions.

use axum::Router;
use casa_client::Snapshot;
use casa_core::AggregationEngine;
use casa_core::totals::DataIssue;
use tracing::warn;

use crate::AppState;

pub mod categories;
pub mod dashboard;
pub mod health;
pub mod people;
pub mod totals;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(totals::routes())
        .merge(people::routes())
        .merge(categories::routes())
        .merge(transactions::routes())
}

/// Logs the data-quality conditions of a loaded snapshot and returns them.
///
/// Nothing is rejected; the views are computed regardless.
pub(crate) fn audit_snapshot(snapshot: &Snapshot) -> Vec<DataIssue> {
    let people = Some(snapshot.people.as_slice());
    let categories = Some(snapshot.categories.as_slice());
    let issues = AggregationEngine::audit_transactions(&snapshot.transactions, people, categories);
    for issue in &issues {
        warn!(%issue, "Household data issue");
    }
    issues
}
