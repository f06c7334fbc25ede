//! JSON REST handlers for equipment.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use gearguard_app::ports::Storage;
use gearguard_domain::equipment::{
    Equipment, EquipmentDetails, EquipmentFilter, EquipmentPatch, EquipmentState,
};
use gearguard_domain::id::{CategoryId, DepartmentId, EmployeeId, EquipmentId, TeamId, WorkCenterId};

use crate::api::{
    MessageBody, nullable, parse_id, parse_nullable_timestamp, parse_optional_id,
    parse_optional_timestamp, parse_query, required,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub department_id: Option<String>,
    pub employee_id: Option<String>,
    pub state: Option<String>,
}

/// Request body for registering equipment.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentRequest {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<CategoryId>,
    pub department_id: Option<DepartmentId>,
    pub employee_id: Option<EmployeeId>,
    pub location: Option<String>,
    pub purchase_date: Option<String>,
    pub warranty_end: Option<String>,
    pub work_center_id: Option<WorkCenterId>,
    pub maintenance_team_id: Option<TeamId>,
    pub default_technician_id: Option<EmployeeId>,
    pub state: Option<String>,
}

/// Request body for a partial update.
///
/// Absent fields are left alone. `null` clears the nullable ones.
#[allow(clippy::option_option)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEquipmentRequest {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<CategoryId>,
    pub department_id: Option<DepartmentId>,
    #[serde(default, deserialize_with = "nullable")]
    pub employee_id: Option<Option<EmployeeId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub purchase_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub warranty_end: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub work_center_id: Option<Option<WorkCenterId>>,
    pub maintenance_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "nullable")]
    pub default_technician_id: Option<Option<EmployeeId>>,
    pub state: Option<EquipmentState>,
}

impl UpdateEquipmentRequest {
    fn into_patch(self) -> Result<EquipmentPatch, ApiError> {
        Ok(EquipmentPatch {
            name: self.name,
            serial_number: self.serial_number,
            category_id: self.category_id,
            department_id: self.department_id,
            employee_id: self.employee_id,
            location: self
                .location
                .map(|location| location.filter(|l| !l.trim().is_empty())),
            purchase_date: parse_nullable_timestamp("purchaseDate", self.purchase_date)?,
            warranty_end: parse_nullable_timestamp("warrantyEnd", self.warranty_end)?,
            work_center_id: self.work_center_id,
            maintenance_team_id: self.maintenance_team_id,
            default_technician_id: self.default_technician_id,
            state: self.state,
        })
    }
}

#[derive(Serialize)]
pub struct CountBody {
    pub count: usize,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<EquipmentDetails>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<EquipmentDetails>),
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
    Created(Json<EquipmentDetails>),
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
                message: "Equipment deleted successfully",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the open-requests-count endpoint.
pub enum CountResponse {
    Ok(Json<CountBody>),
}

impl IntoResponse for CountResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/equipment?departmentId=&employeeId=&state=`
pub async fn list<S: Storage>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError> {
    let filter = EquipmentFilter {
        department_id: parse_optional_id(query.department_id.as_deref())?,
        employee_id: parse_optional_id(query.employee_id.as_deref())?,
        state: parse_query(query.state.as_deref())?,
    };
    let equipment = state.equipment_service.list_equipment(filter).await?;
    Ok(ListResponse::Ok(Json(equipment)))
}

/// `GET /api/equipment/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let equipment_id: EquipmentId = parse_id(&id)?;
    let equipment = state.equipment_service.get_equipment(equipment_id).await?;
    Ok(GetResponse::Ok(Json(equipment)))
}

/// `POST /api/equipment`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateEquipmentRequest>,
) -> Result<CreateResponse, ApiError> {
    let equipment_state: Option<EquipmentState> = parse_query(req.state.as_deref())?;
    let new_equipment = Equipment::builder()
        .name(req.name.unwrap_or_default())
        .serial_number(req.serial_number.unwrap_or_default())
        .category_id(required("categoryId", req.category_id)?)
        .department_id(required("departmentId", req.department_id)?)
        .employee_id(req.employee_id)
        .location(req.location.filter(|l| !l.trim().is_empty()))
        .purchase_date(parse_optional_timestamp(
            "purchaseDate",
            req.purchase_date.as_deref(),
        )?)
        .warranty_end(parse_optional_timestamp(
            "warrantyEnd",
            req.warranty_end.as_deref(),
        )?)
        .work_center_id(req.work_center_id)
        .maintenance_team_id(req.maintenance_team_id)
        .default_technician_id(req.default_technician_id)
        .state(equipment_state.unwrap_or_default())
        .build()?;
    let created = state
        .equipment_service
        .create_equipment(new_equipment)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /api/equipment/{id}`
pub async fn update<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEquipmentRequest>,
) -> Result<GetResponse, ApiError> {
    let equipment_id: EquipmentId = parse_id(&id)?;
    let patch = req.into_patch()?;
    let updated = state
        .equipment_service
        .update_equipment(equipment_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/equipment/{id}`
pub async fn delete<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let equipment_id: EquipmentId = parse_id(&id)?;
    state.equipment_service.delete_equipment(equipment_id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `GET /api/equipment/{id}/open-requests-count`
pub async fn open_requests_count<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<CountResponse, ApiError> {
    let equipment_id: EquipmentId = parse_id(&id)?;
    let count = state
        .equipment_service
        .open_request_count(equipment_id)
        .await?;
    Ok(CountResponse::Ok(Json(CountBody { count })))
}
