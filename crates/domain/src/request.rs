//! Maintenance request: a work item against a piece of equipment.
//!
//! Requests move through a fixed workflow: `New` → `In Progress` →
//! `Repaired` or `Scrap`. Moving a request to `Scrap` retires the
//! equipment it was filed against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equipment::Equipment;
use crate::error::{GearGuardError, ValidationError};
use crate::id::{CategoryId, DepartmentId, EmployeeId, EquipmentId, RequestId, TeamId};
use crate::time::Timestamp;

const REQUEST_NUMBER_PREFIX: &str = "MR";

/// Kind of maintenance work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corrective => "Corrective",
            Self::Preventive => "Preventive",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Corrective" => Ok(Self::Corrective),
            "Preventive" => Ok(Self::Preventive),
            other => Err(ValidationError::UnknownValue {
                field: "request type",
                value: other.to_string(),
            }),
        }
    }
}

/// Workflow state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

impl RequestState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Repaired => "Repaired",
            Self::Scrap => "Scrap",
        }
    }

    /// Whether work on the request is still outstanding.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }

    /// Whether entering this state retires the linked equipment.
    #[must_use]
    pub fn scraps_equipment(self) -> bool {
        matches!(self, Self::Scrap)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "In Progress" => Ok(Self::InProgress),
            "Repaired" => Ok(Self::Repaired),
            "Scrap" => Ok(Self::Scrap),
            other => Err(ValidationError::UnknownValue {
                field: "request state",
                value: other.to_string(),
            }),
        }
    }
}

/// Human-facing request number, `MR-{year}-{sequence:04}`.
///
/// Sequences restart at 1 every calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestNumber {
    year: i32,
    sequence: u32,
}

impl RequestNumber {
    #[must_use]
    pub fn new(year: i32, sequence: u32) -> Self {
        Self { year, sequence }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn sequence(self) -> u32 {
        self.sequence
    }

    /// The number following `last` within `year`.
    ///
    /// `last` is the highest number already issued for `year`, if any. A
    /// `last` from another year is ignored.
    #[must_use]
    pub fn next(year: i32, last: Option<Self>) -> Self {
        let sequence = match last {
            Some(last) if last.year == year => last.sequence.saturating_add(1),
            _ => 1,
        };
        Self { year, sequence }
    }

    /// Prefix shared by every number issued in `year`, e.g. `MR-2025-`.
    #[must_use]
    pub fn year_prefix(year: i32) -> String {
        format!("{REQUEST_NUMBER_PREFIX}-{year}-")
    }
}

impl fmt::Display for RequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{REQUEST_NUMBER_PREFIX}-{}-{:04}",
            self.year, self.sequence
        )
    }
}

impl FromStr for RequestNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRequestNumber(s.to_string());
        let mut parts = s.split('-');
        let (Some(REQUEST_NUMBER_PREFIX), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self {
            year: year.parse().map_err(|_| invalid())?,
            sequence: sequence.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for RequestNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RequestNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A persisted maintenance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: RequestId,
    pub request_number: RequestNumber,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: EquipmentId,
    pub equipment_category_id: CategoryId,
    pub department_id: DepartmentId,
    pub employee_id: Option<EmployeeId>,
    pub maintenance_team_id: TeamId,
    pub assigned_technician_id: Option<EmployeeId>,
    pub scheduled_date: Option<Timestamp>,
    pub start_datetime: Option<Timestamp>,
    pub duration_hours: Option<f64>,
    pub state: RequestState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// What a caller supplies when filing a request.
///
/// Everything else is derived from the equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub request_type: RequestType,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: EquipmentId,
    pub assigned_technician_id: Option<EmployeeId>,
    pub scheduled_date: Option<Timestamp>,
    pub start_datetime: Option<Timestamp>,
    pub duration_hours: Option<f64>,
    pub state: Option<RequestState>,
}

/// A request ready to be stored; the store assigns the id and number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMaintenanceRequest {
    pub request_type: RequestType,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: EquipmentId,
    pub equipment_category_id: CategoryId,
    pub department_id: DepartmentId,
    pub employee_id: Option<EmployeeId>,
    pub maintenance_team_id: TeamId,
    pub assigned_technician_id: Option<EmployeeId>,
    pub scheduled_date: Option<Timestamp>,
    pub start_datetime: Option<Timestamp>,
    pub duration_hours: Option<f64>,
    pub state: RequestState,
}

impl RequestDraft {
    /// Check caller-supplied invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when the subject is empty or
    /// the duration is negative.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingField("subject").into());
        }
        if self.duration_hours.is_some_and(|hours| hours < 0.0) {
            return Err(ValidationError::Negative("durationHours").into());
        }
        Ok(())
    }

    /// Fill category, department, owner, team and technician from `equipment`.
    ///
    /// An explicitly assigned technician wins over the equipment's default.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if the draft is invalid.
    pub fn for_equipment(
        self,
        equipment: &Equipment,
    ) -> Result<NewMaintenanceRequest, GearGuardError> {
        self.validate()?;
        Ok(NewMaintenanceRequest {
            request_type: self.request_type,
            subject: self.subject,
            description: self.description,
            equipment_id: equipment.id,
            equipment_category_id: equipment.category_id,
            department_id: equipment.department_id,
            employee_id: equipment.employee_id,
            maintenance_team_id: equipment.maintenance_team_id,
            assigned_technician_id: self
                .assigned_technician_id
                .or(equipment.default_technician_id),
            scheduled_date: self.scheduled_date,
            start_datetime: self.start_datetime,
            duration_hours: self.duration_hours,
            state: self.state.unwrap_or_default(),
        })
    }
}

/// A request enriched with the display names of its related records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    #[serde(flatten)]
    pub request: MaintenanceRequest,
    pub equipment_name: Option<String>,
    pub team_name: Option<String>,
    pub technician_name: Option<String>,
}

/// Optional filters for listing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub state: Option<RequestState>,
    pub team_id: Option<TeamId>,
    pub request_type: Option<RequestType>,
}

impl RequestFilter {
    /// Whether `request` passes every set filter.
    #[must_use]
    pub fn matches(&self, request: &MaintenanceRequest) -> bool {
        self.state.is_none_or(|state| request.state == state)
            && self
                .team_id
                .is_none_or(|team| request.maintenance_team_id == team)
            && self
                .request_type
                .is_none_or(|kind| request.request_type == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentState;
    use crate::time::now;

    fn equipment() -> Equipment {
        let ts = now();
        Equipment {
            id: EquipmentId::new(3),
            name: "HVAC Unit #3".to_string(),
            serial_number: "HVAC-2021-003".to_string(),
            category_id: CategoryId::new(3),
            department_id: DepartmentId::new(1),
            employee_id: Some(EmployeeId::new(1)),
            location: None,
            purchase_date: None,
            warranty_end: None,
            work_center_id: None,
            maintenance_team_id: TeamId::new(2),
            default_technician_id: Some(EmployeeId::new(2)),
            state: EquipmentState::Active,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn draft() -> RequestDraft {
        RequestDraft {
            request_type: RequestType::Preventive,
            subject: "Quarterly HVAC filter replacement".to_string(),
            description: None,
            equipment_id: EquipmentId::new(3),
            assigned_technician_id: None,
            scheduled_date: None,
            start_datetime: None,
            duration_hours: None,
            state: None,
        }
    }

    #[test]
    fn should_format_request_number_with_padding() {
        assert_eq!(RequestNumber::new(2025, 7).to_string(), "MR-2025-0007");
        assert_eq!(RequestNumber::new(2025, 12345).to_string(), "MR-2025-12345");
    }

    #[test]
    fn should_parse_request_number() {
        let number: RequestNumber = "MR-2025-0042".parse().unwrap();
        assert_eq!(number, RequestNumber::new(2025, 42));
    }

    #[test]
    fn should_reject_malformed_request_numbers() {
        for text in ["REQ-2025-001", "MR-2025", "MR-2025-00x1", "MR-2025-0001-9"] {
            assert!(text.parse::<RequestNumber>().is_err(), "{text}");
        }
    }

    #[test]
    fn should_start_sequence_at_one_for_new_year() {
        assert_eq!(RequestNumber::next(2025, None).sequence(), 1);
        let last_year = RequestNumber::new(2024, 99);
        assert_eq!(
            RequestNumber::next(2025, Some(last_year)),
            RequestNumber::new(2025, 1)
        );
    }

    #[test]
    fn should_increment_last_sequence_within_year() {
        let last = RequestNumber::new(2025, 9);
        assert_eq!(
            RequestNumber::next(2025, Some(last)).to_string(),
            "MR-2025-0010"
        );
    }

    #[test]
    fn should_serialize_state_with_space() {
        let json = serde_json::to_string(&RequestState::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(
            "In Progress".parse::<RequestState>().unwrap(),
            RequestState::InProgress
        );
    }

    #[test]
    fn should_treat_new_and_in_progress_as_open() {
        assert!(RequestState::New.is_open());
        assert!(RequestState::InProgress.is_open());
        assert!(!RequestState::Repaired.is_open());
        assert!(!RequestState::Scrap.is_open());
    }

    #[test]
    fn should_only_scrap_equipment_in_scrap_state() {
        assert!(RequestState::Scrap.scraps_equipment());
        assert!(!RequestState::Repaired.scraps_equipment());
    }

    #[test]
    fn should_auto_fill_from_equipment() {
        let new = draft().for_equipment(&equipment()).unwrap();
        assert_eq!(new.equipment_category_id, CategoryId::new(3));
        assert_eq!(new.department_id, DepartmentId::new(1));
        assert_eq!(new.employee_id, Some(EmployeeId::new(1)));
        assert_eq!(new.maintenance_team_id, TeamId::new(2));
        assert_eq!(new.assigned_technician_id, Some(EmployeeId::new(2)));
        assert_eq!(new.state, RequestState::New);
    }

    #[test]
    fn should_prefer_explicit_technician() {
        let mut draft = draft();
        draft.assigned_technician_id = Some(EmployeeId::new(9));
        let new = draft.for_equipment(&equipment()).unwrap();
        assert_eq!(new.assigned_technician_id, Some(EmployeeId::new(9)));
    }

    #[test]
    fn should_reject_empty_subject() {
        let mut draft = draft();
        draft.subject = " ".to_string();
        assert!(matches!(
            draft.for_equipment(&equipment()),
            Err(GearGuardError::Validation(ValidationError::MissingField(
                "subject"
            )))
        ));
    }

    #[test]
    fn should_reject_negative_duration() {
        let mut draft = draft();
        draft.duration_hours = Some(-2.0);
        assert!(draft.validate().is_err());
    }
}
