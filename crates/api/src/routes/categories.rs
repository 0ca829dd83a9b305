//! Category routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use casa_core::entry::{NewCategory, validate_category};
use casa_core::model::Category;
use casa_shared::AppError;
use casa_shared::types::CategoryId;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::response::{error_response, flash_error, flash_success};

const CREATED: &str = "Categoria cadastrada com sucesso!";
const CREATE_FAILED: &str = "Erro ao salvar categoria.";
const DELETED: &str = "Categoria removida com sucesso!";
const DELETE_FAILED: &str = "Erro ao remover categoria.";

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}

/// Registered categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Categories in upstream order.
    pub categories: Vec<Category>,
}

/// GET /categories
async fn list_categories(State(state): State<AppState>) -> Response {
    match state.api.list_categories().await {
        Ok(categories) => (StatusCode::OK, Json(CategoriesResponse { categories })).into_response(),
        Err(e) => error_response(&AppError::from(e)),
    }
}

/// POST /categories
async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<NewCategory>,
) -> Response {
    if let Err(e) = validate_category(&input) {
        return flash_error(&AppError::from(e), CREATE_FAILED);
    }

    match state.api.create_category(&input).await {
        Ok(_) => {
            info!(label = %input.label.trim(), purpose = %input.purpose, "Category registered");
            flash_success(StatusCode::CREATED, CREATED)
        }
        Err(e) => flash_error(&AppError::from(e), CREATE_FAILED),
    }
}

/// DELETE /categories/{id}
async fn delete_category(State(state): State<AppState>, Path(id): Path<CategoryId>) -> Response {
    match state.api.delete_category(id).await {
        Ok(_) => {
            info!(category_id = %id, "Category removed");
            flash_success(StatusCode::OK, DELETED)
        }
        Err(e) => flash_error(&AppError::from(e), DELETE_FAILED),
    }
}
