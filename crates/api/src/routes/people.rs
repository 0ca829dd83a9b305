//! People (moradores) routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use casa_core::entry::{NewPerson, validate_person};
use casa_core::model::Person;
use casa_shared::AppError;
use casa_shared::types::PersonId;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::response::{error_response, flash_error, flash_success};

const CREATED: &str = "Morador cadastrado com sucesso!";
const CREATE_FAILED: &str = "Erro ao salvar morador.";
const DELETED: &str = "Morador removido com sucesso!";
const DELETE_FAILED: &str = "Erro ao remover morador.";

/// Creates the people routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route("/people/{id}", delete(delete_person))
}

/// Registered people.
#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    /// People in upstream order.
    pub people: Vec<Person>,
}

/// GET /people
async fn list_people(State(state): State<AppState>) -> Response {
    match state.api.list_people().await {
        Ok(people) => (StatusCode::OK, Json(PeopleResponse { people })).into_response(),
        Err(e) => error_response(&AppError::from(e)),
    }
}

/// POST /people
async fn create_person(State(state): State<AppState>, Json(input): Json<NewPerson>) -> Response {
    if let Err(e) = validate_person(&input) {
        return flash_error(&AppError::from(e), CREATE_FAILED);
    }

    match state.api.create_person(&input).await {
        Ok(_) => {
            info!(name = %input.name.trim(), "Person registered");
            flash_success(StatusCode::CREATED, CREATED)
        }
        Err(e) => flash_error(&AppError::from(e), CREATE_FAILED),
    }
}

/// DELETE /people/{id}
///
/// The household API removes the person's transactions along with them.
async fn delete_person(State(state): State<AppState>, Path(id): Path<PersonId>) -> Response {
    match state.api.delete_person(id).await {
        Ok(_) => {
            info!(person_id = %id, "Person removed");
            flash_success(StatusCode::OK, DELETED)
        }
        Err(e) => flash_error(&AppError::from(e), DELETE_FAILED),
    }
}
