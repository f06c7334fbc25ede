//! JSON REST handlers for maintenance requests, the kanban board and the
//! preventive-maintenance calendar.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::calendar::CalendarEvent;
use gearguard_domain::id::{EmployeeId, EquipmentId, RequestId};
use gearguard_domain::kanban::KanbanBoard;
use gearguard_domain::request::{
    RequestDetails, RequestDraft, RequestFilter, RequestState, RequestType,
};

use crate::api::{
    MessageBody, parse_id, parse_optional_id, parse_optional_timestamp, parse_query, required,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub state: Option<String>,
    pub team_id: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<String>,
}

/// Request body for filing a request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub equipment_id: Option<EquipmentId>,
    pub assigned_technician_id: Option<EmployeeId>,
    pub scheduled_date: Option<String>,
    pub start_datetime: Option<String>,
    pub duration_hours: Option<f64>,
    pub state: Option<String>,
}

/// Request body for `PATCH /api/requests/{id}/state`.
#[derive(Deserialize)]
pub struct UpdateStateBody {
    pub state: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RequestDetails>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and state endpoints.
pub enum GetResponse {
    Ok(Json<RequestDetails>),
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
    Created(Json<RequestDetails>),
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
                message: "Request deleted successfully",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the kanban endpoint.
pub enum KanbanResponse {
    Ok(Json<KanbanBoard<RequestDetails>>),
}

impl IntoResponse for KanbanResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the calendar endpoint.
pub enum CalendarResponse {
    Ok(Json<Vec<CalendarEvent>>),
}

impl IntoResponse for CalendarResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/requests?state=&teamId=&type=`
pub async fn list<S: Storage>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError> {
    let filter = RequestFilter {
        state: parse_query(query.state.as_deref())?,
        team_id: parse_optional_id(query.team_id.as_deref())?,
        request_type: parse_query(query.request_type.as_deref())?,
    };
    let requests = state.request_service.list_requests(filter).await?;
    Ok(ListResponse::Ok(Json(requests)))
}

/// `GET /api/requests/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let request_id: RequestId = parse_id(&id)?;
    let request = state.request_service.get_request(request_id).await?;
    Ok(GetResponse::Ok(Json(request)))
}

/// `POST /api/requests`
///
/// Category, department, owner and team are copied from the equipment.
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(body): Json<CreateRequestBody>,
) -> Result<CreateResponse, ApiError> {
    let request_type: Option<RequestType> = parse_query(body.request_type.as_deref())?;
    let draft = RequestDraft {
        request_type: required("type", request_type)?,
        subject: body.subject.unwrap_or_default(),
        description: body.description.filter(|d| !d.trim().is_empty()),
        equipment_id: required("equipmentId", body.equipment_id)?,
        assigned_technician_id: body.assigned_technician_id,
        scheduled_date: parse_optional_timestamp(
            "scheduledDate",
            body.scheduled_date.as_deref(),
        )?,
        start_datetime: parse_optional_timestamp(
            "startDatetime",
            body.start_datetime.as_deref(),
        )?,
        duration_hours: body.duration_hours,
        state: parse_query(body.state.as_deref())?,
    };
    let created = state.request_service.create_request(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/requests/{id}`
pub async fn delete<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let request_id: RequestId = parse_id(&id)?;
    state.request_service.delete_request(request_id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `PATCH /api/requests/{id}/state`
pub async fn update_state<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStateBody>,
) -> Result<GetResponse, ApiError> {
    let request_id: RequestId = parse_id(&id)?;
    let new_state: Option<RequestState> = parse_query(body.state.as_deref())?;
    let updated = state
        .request_service
        .update_state(request_id, required("state", new_state)?)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `GET /api/requests/kanban`
pub async fn kanban<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<KanbanResponse, ApiError> {
    let board = state.request_service.kanban().await?;
    Ok(KanbanResponse::Ok(Json(board)))
}

/// `GET /api/requests/calendar`
pub async fn calendar<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<CalendarResponse, ApiError> {
    let events = state.request_service.calendar().await?;
    Ok(CalendarResponse::Ok(Json(events)))
}
