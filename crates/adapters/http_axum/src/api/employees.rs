//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::employee::{Employee, EmployeeFilter};
use gearguard_domain::id::EmployeeId;

use crate::api::{parse_id, parse_optional_id, parse_query};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub role: Option<String>,
    pub team_id: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Employee>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/employees?role=&teamId=`
pub async fn list<S: Storage>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError> {
    let filter = EmployeeFilter {
        role: parse_query(query.role.as_deref())?,
        team_id: parse_optional_id(query.team_id.as_deref())?,
    };
    let employees = state.employee_service.list_employees(filter).await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /api/employees/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let employee_id: EmployeeId = parse_id(&id)?;
    let employee = state.employee_service.get_employee(employee_id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}
