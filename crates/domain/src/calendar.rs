//! Calendar projection of scheduled preventive maintenance.

use serde::Serialize;

use crate::id::RequestId;
use crate::request::{MaintenanceRequest, RequestNumber, RequestType};

const DEFAULT_TEAM_COLOR: &str = "bg-blue-500";

/// One entry on the maintenance calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: RequestId,
    /// `yyyy-MM-dd`
    pub date: String,
    pub subject: String,
    pub equipment_name: String,
    pub team: String,
    pub team_color: &'static str,
    pub request_number: RequestNumber,
}

impl CalendarEvent {
    /// Project a request onto the calendar.
    ///
    /// Only preventive requests with a scheduled date appear.
    #[must_use]
    pub fn from_request(
        request: &MaintenanceRequest,
        equipment_name: impl Into<String>,
        team_name: impl Into<String>,
    ) -> Option<Self> {
        if request.request_type != RequestType::Preventive {
            return None;
        }
        let scheduled = request.scheduled_date?;
        let team = team_name.into();
        Some(Self {
            id: request.id,
            date: scheduled.format("%Y-%m-%d").to_string(),
            subject: request.subject.clone(),
            equipment_name: equipment_name.into(),
            team_color: team_color(&team),
            team,
            request_number: request.request_number,
        })
    }
}

/// Badge color for a maintenance team.
#[must_use]
pub fn team_color(team_name: &str) -> &'static str {
    match team_name {
        "Electricians" => "bg-amber-500",
        "IT Support" => "bg-purple-500",
        _ => DEFAULT_TEAM_COLOR,
    }
}
