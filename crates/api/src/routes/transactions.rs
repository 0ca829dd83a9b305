//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use casa_client::load_snapshot;
use casa_core::AggregationEngine;
use casa_core::entry::{NewTransaction, validate_transaction};
use casa_core::model::{Person, Transaction, TransactionKind};
use casa_shared::AppError;
use casa_shared::types::{PersonId, TransactionId};
use serde::Serialize;
use tracing::info;

use super::audit_snapshot;
use crate::AppState;
use crate::response::{MoneyView, RangeQuery, error_response, flash_error, flash_success};

const CREATED: &str = "Transação registrada com sucesso!";
const CREATE_FAILED: &str = "Erro ao salvar transação.";

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/transactions",
        get(list_transactions).post(create_transaction),
    )
}

// ============================================================================
// Response Types
// ============================================================================

/// One transaction as listed by the dashboard.
#[derive(Debug, Serialize)]
pub struct TransactionRow {
    /// Transaction ID.
    pub id: TransactionId,
    /// Description.
    pub description: String,
    /// Amount.
    pub amount: MoneyView,
    /// Normalized kind.
    pub kind: TransactionKind,
    /// Owning person, if any.
    pub person_id: Option<PersonId>,
    /// Owner name, from the transaction or the loaded people.
    pub person_name: Option<String>,
    /// Category label.
    pub category: String,
    /// Timestamp as received.
    pub timestamp: String,
}

impl TransactionRow {
    /// Builds a row, filling the owner name from `people` when the
    /// transaction does not carry it.
    pub fn new(transaction: &Transaction, people: &[Person]) -> Self {
        let person_id = transaction.person_id();
        let person_name = transaction
            .person
            .as_ref()
            .and_then(|person| person.name.clone())
            .or_else(|| {
                people
                    .iter()
                    .find(|p| Some(p.id) == person_id)
                    .map(|p| p.name.clone())
            });

        Self {
            id: transaction.id,
            description: transaction.description.clone(),
            amount: transaction.amount.into(),
            kind: AggregationEngine::classify_kind(transaction),
            person_id,
            person_name,
            category: transaction.category.label.clone(),
            timestamp: transaction.timestamp.as_str().to_string(),
        }
    }
}

/// Transactions inside the requested range.
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    /// Rows in upstream order.
    pub transactions: Vec<TransactionRow>,
    /// Number of rows.
    pub count: usize,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /transactions
async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Response {
    let range = match query.to_range() {
        Ok(range) => range,
        Err(e) => return error_response(&e),
    };

    let snapshot = match load_snapshot(state.api.as_ref()).await {
        Ok(snapshot) => snapshot,
        Err(e) => return error_response(&AppError::from(e)),
    };
    audit_snapshot(&snapshot);

    let transactions: Vec<TransactionRow> =
        AggregationEngine::filter_transactions(&snapshot.transactions, &range)
            .into_iter()
            .map(|t| TransactionRow::new(t, &snapshot.people))
            .collect();

    (
        StatusCode::OK,
        Json(TransactionListResponse {
            count: transactions.len(),
            transactions,
        }),
    )
        .into_response()
}

/// POST /transactions
///
/// The person and category are checked against fresh lists before the
/// record is forwarded, so minors are refused here rather than upstream.
async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<NewTransaction>,
) -> Response {
    let lists = tokio::try_join!(state.api.list_people(), state.api.list_categories());
    let (people, categories) = match lists {
        Ok(lists) => lists,
        Err(e) => return flash_error(&AppError::from(e), CREATE_FAILED),
    };

    let person = match validate_transaction(&input, &people, &categories) {
        Ok(person) => person,
        Err(e) => return flash_error(&AppError::from(e), CREATE_FAILED),
    };

    match state.api.create_transaction(&input).await {
        Ok(_) => {
            info!(
                person_id = %person.id,
                kind = %input.kind,
                amount = %input.amount,
                "Transaction recorded"
            );
            flash_success(StatusCode::CREATED, CREATED)
        }
        Err(e) => flash_error(&AppError::from(e), CREATE_FAILED),
    }
}
