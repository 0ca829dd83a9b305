//! Dashboard routes.
//!
//! Summary cards, the two charts and the recent-activity list, all computed
//! over one date range.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use casa_client::load_snapshot;
use casa_core::AggregationEngine;
use casa_core::totals::{AggregateTotals, CategoryExpense, IncomeExpenseChart};
use casa_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::audit_snapshot;
use super::transactions::TransactionRow;
use crate::AppState;
use crate::response::{MoneyView, error_response, parse_range};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end: Option<String>,
    /// List every transaction instead of the most recent few.
    #[serde(default)]
    pub all: bool,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Summary cards.
    pub summary: SummaryCards,
    /// Income versus expense bars.
    pub chart: IncomeExpenseChart,
    /// Expense totals per category label.
    pub expenses_by_category: Vec<CategoryExpense>,
    /// Transactions shown in the activity list.
    pub transactions: Vec<TransactionRow>,
    /// Transactions in range, shown or not.
    pub total_transactions: usize,
    /// Whether `transactions` holds every transaction in range.
    pub showing_all: bool,
}

/// Summary cards.
#[derive(Debug, Serialize)]
pub struct SummaryCards {
    /// Total income.
    pub income: MoneyView,
    /// Total expense.
    pub expense: MoneyView,
    /// Income minus expense.
    pub balance: MoneyView,
}

impl From<AggregateTotals> for SummaryCards {
    fn from(totals: AggregateTotals) -> Self {
        Self {
            income: totals.income.into(),
            expense: totals.expense.into(),
            balance: totals.balance.into(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let range = match parse_range(query.start.as_deref(), query.end.as_deref()) {
        Ok(range) => range,
        Err(e) => return error_response(&e),
    };

    let snapshot = match load_snapshot(state.api.as_ref()).await {
        Ok(snapshot) => snapshot,
        Err(e) => return error_response(&AppError::from(e)),
    };
    audit_snapshot(&snapshot);

    // Cards count every transaction in range, including ones whose person
    // is no longer registered.
    let totals = AggregationEngine::summarize_transactions(&snapshot.transactions, &range);
    let in_range = AggregationEngine::filter_transactions(&snapshot.transactions, &range);
    let groups = AggregationEngine::group_expenses_by_category(&snapshot.transactions, &range);
    let total_transactions = in_range.len();
    let shown = if query.all {
        total_transactions
    } else {
        total_transactions.min(state.dashboard.recent_limit)
    };

    debug!(
        total_transactions,
        shown,
        income = %totals.income,
        expense = %totals.expense,
        "Dashboard computed"
    );

    let response = DashboardResponse {
        summary: totals.into(),
        chart: AggregationEngine::income_expense_chart(&totals),
        expenses_by_category: groups,
        transactions: in_range
            .into_iter()
            .take(shown)
            .map(|t| TransactionRow::new(t, &snapshot.people))
            .collect(),
        total_transactions,
        showing_all: shown == total_transactions,
    };

    (StatusCode::OK, Json(response)).into_response()
}
