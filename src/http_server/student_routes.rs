//! Student HTTP Routes
//!
//! The five student endpoints, mounted under `/api/v1/student`. Each handler
//! makes exactly one service call.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::config::NotFoundPolicy;
use crate::student::{Student, StudentError, StudentResult, StudentService};

/// Base path the student routes are nested under
pub const STUDENT_BASE_PATH: &str = "/api/v1/student";

/// Student route state shared across handlers
pub struct StudentState {
    pub service: Arc<StudentService>,
    pub not_found: NotFoundPolicy,
}

impl StudentState {
    pub fn new(service: Arc<StudentService>, not_found: NotFoundPolicy) -> Self {
        Self { service, not_found }
    }
}

/// Create student routes
pub fn student_routes(state: Arc<StudentState>) -> Router {
    Router::new()
        .route("/save", post(save_handler))
        .route("/getall", get(list_handler))
        .route("/edit/:id", put(update_handler))
        .route("/delete/:id", delete(delete_handler))
        .route("/search/:id", get(search_handler))
        .with_state(state)
}

fn bind_body(payload: Result<Json<Student>, JsonRejection>) -> StudentResult<Student> {
    payload
        .map(|Json(student)| student)
        .map_err(|rejection| StudentError::InvalidBody(rejection.body_text()))
}

/// `POST /save`: upsert and answer with the identifier as plain text
async fn save_handler(
    State(state): State<Arc<StudentState>>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<String, StudentError> {
    let student = bind_body(payload)?;
    let saved = state.service.save_or_update(student)?;
    Ok(saved.id.unwrap_or_default())
}

async fn list_handler(
    State(state): State<Arc<StudentState>>,
) -> Result<Json<Vec<Student>>, StudentError> {
    Ok(Json(state.service.list_all()?))
}

/// `PUT /edit/{id}`: the path identifier wins over any `_id` in the body
async fn update_handler(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<Json<Student>, StudentError> {
    let mut student = bind_body(payload)?;
    student.set_id(id);
    Ok(Json(state.service.save_or_update(student)?))
}

async fn delete_handler(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudentError> {
    state.service.delete(&id)?;
    Ok(StatusCode::OK)
}

async fn search_handler(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
) -> Result<Response, StudentError> {
    match state.service.get_by_id(&id)? {
        Some(student) => Ok(Json(student).into_response()),
        None => match state.not_found {
            NotFoundPolicy::Empty => Ok(StatusCode::OK.into_response()),
            NotFoundPolicy::Status => Err(StudentError::NotFound(id)),
        },
    }
}
