//! JSON REST API routes.

#[allow(clippy::missing_errors_doc)]
pub mod auth;
#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod departments;
#[allow(clippy::missing_errors_doc)]
pub mod employees;
#[allow(clippy::missing_errors_doc)]
pub mod equipment;
#[allow(clippy::missing_errors_doc)]
pub mod requests;
#[allow(clippy::missing_errors_doc)]
pub mod teams;
#[allow(clippy::missing_errors_doc)]
pub mod work_centers;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, patch, post};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use gearguard_app::ports::Storage;
use gearguard_domain::error::ValidationError;
use gearguard_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API router (nested under `/api` by the caller).
pub fn routes<S: Storage>() -> Router<AppState<S>> {
    Router::new()
        .route("/auth/signup", post(auth::signup::<S>))
        .route("/auth/login", post(auth::login::<S>))
        .route("/auth/logout", post(auth::logout::<S>))
        .route("/auth/me", get(auth::me::<S>))
        .route(
            "/departments",
            get(departments::list::<S>).post(departments::create::<S>),
        )
        .route("/teams", get(teams::list::<S>).post(teams::create::<S>))
        .route("/teams/{id}", get(teams::get::<S>))
        .route("/employees", get(employees::list::<S>))
        .route("/employees/{id}", get(employees::get::<S>))
        .route(
            "/equipment-categories",
            get(categories::list::<S>).post(categories::create::<S>),
        )
        .route("/equipment-categories/{id}", get(categories::get::<S>))
        .route(
            "/equipment",
            get(equipment::list::<S>).post(equipment::create::<S>),
        )
        .route(
            "/equipment/{id}",
            get(equipment::get::<S>)
                .patch(equipment::update::<S>)
                .delete(equipment::delete::<S>),
        )
        .route(
            "/equipment/{id}/open-requests-count",
            get(equipment::open_requests_count::<S>),
        )
        .route(
            "/requests",
            get(requests::list::<S>).post(requests::create::<S>),
        )
        .route("/requests/kanban", get(requests::kanban::<S>))
        .route("/requests/calendar", get(requests::calendar::<S>))
        .route(
            "/requests/{id}",
            get(requests::get::<S>).delete(requests::delete::<S>),
        )
        .route("/requests/{id}/state", patch(requests::update_state::<S>))
        .route(
            "/work-centers",
            get(work_centers::list::<S>).post(work_centers::create::<S>),
        )
        .route(
            "/work-centers/{id}",
            get(work_centers::get::<S>).delete(work_centers::delete::<S>),
        )
}

/// `{"message": "..."}` acknowledgement body.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Parse a path or query identifier, answering 400 when it is not a number.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}

/// Parse an optional query value. Absent and empty values both mean "no filter".
pub(crate) fn parse_query<T, E>(raw: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = E>,
    ApiError: From<E>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(value.parse()?)),
    }
}

/// Optional identifier from a query string or JSON body.
pub(crate) fn parse_optional_id<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value).map(Some),
    }
}

/// Accept an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_timestamp(field: &'static str, raw: &str) -> Result<Timestamp, ApiError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ValidationError::UnknownValue {
                field,
                value: raw.to_string(),
            }
            .into()
        })
}

pub(crate) fn parse_optional_timestamp(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<Timestamp>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(field, value).map(Some),
    }
}

/// Nullable timestamp in a partial update. An empty string clears like `null`.
#[allow(clippy::option_option)]
pub(crate) fn parse_nullable_timestamp(
    field: &'static str,
    raw: Option<Option<String>>,
) -> Result<Option<Option<Timestamp>>, ApiError> {
    raw.map(|value| parse_optional_timestamp(field, value.as_deref()))
        .transpose()
}

/// Keep an explicit JSON `null` apart from an absent field.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: absent stays
/// `None`, `null` becomes `Some(None)`.
#[allow(clippy::option_option)]
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reject an absent required field.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ValidationError::MissingField(field).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gearguard_domain::equipment::EquipmentState;
    use gearguard_domain::id::EquipmentId;

    #[test]
    fn should_parse_numeric_ids() {
        let id: EquipmentId = parse_id("12").unwrap();
        assert_eq!(id, EquipmentId::new(12));
        assert!(parse_id::<EquipmentId>("twelve").is_err());
    }

    #[test]
    fn should_treat_empty_query_as_absent() {
        let state: Option<EquipmentState> = parse_query(Some("")).unwrap();
        assert_eq!(state, None);
        let state: Option<EquipmentState> = parse_query(Some("Scrap")).unwrap();
        assert_eq!(state, Some(EquipmentState::Scrap));
        assert!(parse_query::<EquipmentState, _>(Some("Broken")).is_err());
    }

    #[test]
    fn should_accept_plain_dates_and_rfc3339() {
        let plain = parse_timestamp("scheduledDate", "2025-03-09").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap());

        let full = parse_timestamp("scheduledDate", "2025-03-09T14:30:00+02:00").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2025, 3, 9, 12, 30, 0).unwrap());

        assert!(parse_timestamp("scheduledDate", "next tuesday").is_err());
    }

    #[test]
    fn should_clear_nullable_timestamp_on_null_or_blank() {
        assert_eq!(parse_nullable_timestamp("warrantyEnd", None).unwrap(), None);
        assert_eq!(
            parse_nullable_timestamp("warrantyEnd", Some(None)).unwrap(),
            Some(None)
        );
        assert_eq!(
            parse_nullable_timestamp("warrantyEnd", Some(Some(String::new()))).unwrap(),
            Some(None)
        );
        assert_eq!(
            parse_nullable_timestamp("warrantyEnd", Some(Some("2027-01-31".to_string())))
                .unwrap(),
            Some(Some(Utc.with_ymd_and_hms(2027, 1, 31, 0, 0, 0).unwrap()))
        );
    }
}
