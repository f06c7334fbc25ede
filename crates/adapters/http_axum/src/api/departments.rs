//! JSON REST handlers for departments.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::department::Department;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a department.
#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Department>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Department>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/departments`
pub async fn list<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<ListResponse, ApiError> {
    let departments = state.department_service.list_departments().await?;
    Ok(ListResponse::Ok(Json(departments)))
}

/// `POST /api/departments`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<CreateResponse, ApiError> {
    let mut builder = Department::builder().name(req.name.unwrap_or_default());
    if let Some(code) = req.code.filter(|code| !code.trim().is_empty()) {
        builder = builder.code(code);
    }
    let created = state
        .department_service
        .create_department(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
