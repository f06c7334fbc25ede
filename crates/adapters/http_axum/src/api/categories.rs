//! JSON REST handlers for equipment categories.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::category::{CategorySummary, EquipmentCategory};
use gearguard_domain::id::{CategoryId, TeamId};

use crate::api::{parse_id, required};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a category.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub responsible_team_id: Option<TeamId>,
    pub company_name: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CategorySummary>>),
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
    Ok(Json<EquipmentCategory>),
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
    Created(Json<EquipmentCategory>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/equipment-categories`
pub async fn list<S: Storage>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError> {
    let categories = state.category_service.list_categories().await?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `GET /api/equipment-categories/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let category_id: CategoryId = parse_id(&id)?;
    let category = state.category_service.get_category(category_id).await?;
    Ok(GetResponse::Ok(Json(category)))
}

/// `POST /api/equipment-categories`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<CreateResponse, ApiError> {
    let mut builder = EquipmentCategory::builder()
        .name(req.name.unwrap_or_default())
        .responsible_team_id(required("responsibleTeamId", req.responsible_team_id)?);
    if let Some(company) = req.company_name.filter(|c| !c.trim().is_empty()) {
        builder = builder.company_name(company);
    }
    let created = state
        .category_service
        .create_category(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
