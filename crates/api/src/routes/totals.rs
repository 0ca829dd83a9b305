//! Per-person totals report.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use casa_client::{Snapshot, load_snapshot};
use casa_core::model::Person;
use casa_core::totals::PersonTotals;
use casa_core::{AggregationEngine, DateRange};
use casa_shared::AppError;
use casa_shared::types::PersonId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::audit_snapshot;
use super::dashboard::SummaryCards;
use super::transactions::TransactionRow;
use crate::AppState;
use crate::response::{MoneyView, error_response, parse_range};

/// Creates the totals routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/totals", get(get_totals))
}

/// Query parameters for the totals report.
#[derive(Debug, Default, Deserialize)]
pub struct TotalsQuery {
    /// Case-insensitive name search.
    #[serde(default)]
    pub search: String,
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end: Option<String>,
}

/// One row of the report.
#[derive(Debug, Serialize)]
pub struct PersonTotalsRow {
    /// Person ID.
    pub id: PersonId,
    /// Name.
    pub name: String,
    /// Age.
    pub age: u32,
    /// Income in range.
    pub income: MoneyView,
    /// Expense in range.
    pub expense: MoneyView,
    /// Income minus expense.
    pub balance: MoneyView,
}

impl From<PersonTotals> for PersonTotalsRow {
    fn from(totals: PersonTotals) -> Self {
        Self {
            id: totals.person.id,
            name: totals.person.name,
            age: totals.person.age,
            income: totals.income.into(),
            expense: totals.expense.into(),
            balance: totals.balance.into(),
        }
    }
}

/// The person singled out by a search matching exactly one name.
#[derive(Debug, Serialize)]
pub struct SelectedPerson {
    /// Their totals.
    pub totals: PersonTotalsRow,
    /// Their transactions in range.
    pub transactions: Vec<TransactionRow>,
}

/// Response for the totals report.
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    /// Rows matching the search, in registration order.
    pub people: Vec<PersonTotalsRow>,
    /// Sums over the listed rows.
    pub footer: SummaryCards,
    /// Present only when the search matches exactly one person.
    pub selected: Option<SelectedPerson>,
}

/// GET /totals
async fn get_totals(State(state): State<AppState>, Query(query): Query<TotalsQuery>) -> Response {
    let range = match parse_range(query.start.as_deref(), query.end.as_deref()) {
        Ok(range) => range,
        Err(e) => return error_response(&e),
    };

    let snapshot = match load_snapshot(state.api.as_ref()).await {
        Ok(snapshot) => snapshot,
        Err(e) => return error_response(&AppError::from(e)),
    };
    audit_snapshot(&snapshot);

    let all = AggregationEngine::compute_all_person_totals(
        &snapshot.people,
        &snapshot.transactions,
        &range,
    );
    let rows = AggregationEngine::filter_person_totals(all, &query.search);
    let footer = AggregationEngine::compute_aggregate_totals(&rows);

    let unique = AggregationEngine::resolve_unique_match(&snapshot.people, &query.search);
    let selected = unique.map(|person| select(person, &snapshot, &range));

    debug!(
        rows = rows.len(),
        selected = selected.is_some(),
        "Totals computed"
    );

    let response = TotalsResponse {
        people: rows.into_iter().map(PersonTotalsRow::from).collect(),
        footer: footer.into(),
        selected,
    };

    (StatusCode::OK, Json(response)).into_response()
}

fn select(person: &Person, snapshot: &Snapshot, range: &DateRange) -> SelectedPerson {
    let transactions = &snapshot.transactions;
    let totals = AggregationEngine::compute_totals_for_person(person, transactions, range);
    let rows = AggregationEngine::transactions_for_person(person.id, transactions, range)
        .into_iter()
        .map(|t| TransactionRow::new(t, &snapshot.people))
        .collect();

    SelectedPerson {
        totals: totals.into(),
        transactions: rows,
    }
}
