//! Signup, login, logout and current-session handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use gearguard_app::ports::Storage;
use gearguard_app::services::auth_service::Signup;
use gearguard_domain::employee::{Employee, Role};

use crate::api::{MessageBody, parse_query};
use crate::error::ApiError;
use crate::session::{CookieSettings, token_from_headers};
use crate::state::AppState;

/// Request body for `POST /api/auth/signup`.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct SessionBody {
    pub message: &'static str,
    pub employee: Employee,
}

#[derive(Serialize)]
pub struct MeBody {
    pub employee: Employee,
}

/// Possible responses from the signup and login endpoints.
pub enum SessionResponse {
    /// Session opened; carries the `Set-Cookie` value.
    Opened(String, Json<SessionBody>),
}

impl IntoResponse for SessionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Opened(cookie, json) => (CookieSettings::headers(&cookie), json).into_response(),
        }
    }
}

/// Possible responses from the logout endpoint.
pub enum LogoutResponse {
    Ok(String),
}

impl IntoResponse for LogoutResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(cookie) => (
                CookieSettings::headers(&cookie),
                Json(MessageBody {
                    message: "Logout successful",
                }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the me endpoint.
pub enum MeResponse {
    Ok(Json<MeBody>),
}

impl IntoResponse for MeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/auth/signup`
pub async fn signup<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<SignupRequest>,
) -> Result<SessionResponse, ApiError> {
    let role: Option<Role> = parse_query(req.role.as_deref())?;
    let (employee, token) = state
        .auth_service
        .signup(Signup {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            role,
        })
        .await?;
    Ok(SessionResponse::Opened(
        state.cookies.issue(&token),
        Json(SessionBody {
            message: "Signup successful",
            employee,
        }),
    ))
}

/// `POST /api/auth/login`
pub async fn login<S: Storage>(
    State(state): State<AppState<S>>,
    Json(req): Json<LoginRequest>,
) -> Result<SessionResponse, ApiError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let (employee, token) = state.auth_service.login(&email, &password).await?;
    Ok(SessionResponse::Opened(
        state.cookies.issue(&token),
        Json(SessionBody {
            message: "Login successful",
            employee,
        }),
    ))
}

/// `POST /api/auth/logout`
///
/// Always succeeds; there is no server-side session to end.
pub async fn logout<S: Storage>(State(state): State<AppState<S>>) -> LogoutResponse {
    LogoutResponse::Ok(state.cookies.clear())
}

/// `GET /api/auth/me`
pub async fn me<S: Storage>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<MeResponse, ApiError> {
    let token = token_from_headers(&headers);
    let employee = state.auth_service.current_employee(token.as_ref()).await?;
    Ok(MeResponse::Ok(Json(MeBody { employee })))
}
