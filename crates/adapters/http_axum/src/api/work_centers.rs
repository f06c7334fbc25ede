//! JSON REST handlers for work centers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::id::WorkCenterId;
use gearguard_domain::work_center::WorkCenter;

use crate::api::{MessageBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a work center. Omitted numbers take defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkCenterRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub alternative_workcenters: Option<String>,
    pub cost_per_hour: Option<f64>,
    pub capacity_time_efficiency: Option<f64>,
    pub oee_target: Option<f64>,
    pub capacity_per_day: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<WorkCenter>>),
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
    Ok(Json<WorkCenter>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<WorkCenter>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: "Work center deleted successfully",
            })
            .into_response(),
        }
    }
}

/// `GET /api/work-centers`
pub async fn list<S: Storage>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError> {
    let work_centers = state.work_center_service.list_work_centers().await?;
    Ok(ListResponse::Ok(Json(work_centers)))
}

/// `GET /api/work-centers/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let work_center_id: WorkCenterId = parse_id(&id)?;
    let work_center = state
        .work_center_service
        .get_work_center(work_center_id)
        .await?;
    Ok(GetResponse::Ok(Json(work_center)))
}

/// `POST /api/work-centers`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateWorkCenterRequest>,
) -> Result<CreateResponse, ApiError> {
    let mut builder = WorkCenter::builder()
        .code(req.code.unwrap_or_default())
        .name(req.name.unwrap_or_default());
    if let Some(tag) = req.tag {
        builder = builder.tag(tag);
    }
    if let Some(alternatives) = req.alternative_workcenters {
        builder = builder.alternative_workcenters(alternatives);
    }
    if let Some(cost) = req.cost_per_hour {
        builder = builder.cost_per_hour(cost);
    }
    if let Some(efficiency) = req.capacity_time_efficiency {
        builder = builder.capacity_time_efficiency(efficiency);
    }
    if let Some(target) = req.oee_target {
        builder = builder.oee_target(target);
    }
    if let Some(capacity) = req.capacity_per_day {
        builder = builder.capacity_per_day(capacity);
    }
    let created = state
        .work_center_service
        .create_work_center(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/work-centers/{id}`
pub async fn delete<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let work_center_id: WorkCenterId = parse_id(&id)?;
    state
        .work_center_service
        .delete_work_center(work_center_id)
        .await?;
    Ok(DeleteResponse::Deleted)
}
