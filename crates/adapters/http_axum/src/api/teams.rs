//! JSON REST handlers for maintenance teams.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gearguard_app::ports::Storage;
use gearguard_domain::id::TeamId;
use gearguard_domain::team::{MaintenanceTeam, TeamSummary};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a team.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members_count: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<TeamSummary>>),
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
    Ok(Json<MaintenanceTeam>),
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
    Created(Json<MaintenanceTeam>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/teams`
pub async fn list<S: Storage>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError> {
    let teams = state.team_service.list_teams().await?;
    Ok(ListResponse::Ok(Json(teams)))
}

/// `GET /api/teams/{id}`
pub async fn get<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let team_id: TeamId = parse_id(&id)?;
    let team = state.team_service.get_team(team_id).await?;
    Ok(GetResponse::Ok(Json(team)))
}

/// `POST /api/teams`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<CreateResponse, ApiError> {
    let mut builder = MaintenanceTeam::builder().name(req.name.unwrap_or_default());
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(count) = req.members_count {
        builder = builder.members_count(count);
    }
    let created = state.team_service.create_team(builder.build()?).await?;
    Ok(CreateResponse::Created(Json(created)))
}
