//! Equipment: a physical asset tracked for maintenance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::{CategoryId, DepartmentId, EmployeeId, EquipmentId, TeamId, WorkCenterId};
use crate::time::Timestamp;

/// Lifecycle state of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquipmentState {
    #[default]
    Active,
    Scrap,
}

impl EquipmentState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Scrap => "Scrap",
        }
    }
}

impl fmt::Display for EquipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Scrap" => Ok(Self::Scrap),
            other => Err(ValidationError::UnknownValue {
                field: "equipment state",
                value: other.to_string(),
            }),
        }
    }
}

/// A persisted piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub serial_number: String,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    pub employee_id: Option<EmployeeId>,
    pub location: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub warranty_end: Option<Timestamp>,
    pub work_center_id: Option<WorkCenterId>,
    pub maintenance_team_id: TeamId,
    pub default_technician_id: Option<EmployeeId>,
    pub state: EquipmentState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Equipment that has not been stored yet.
///
/// A missing `maintenance_team_id` is filled from the category's
/// responsible team before the record is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipment {
    pub name: String,
    pub serial_number: String,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    pub employee_id: Option<EmployeeId>,
    pub location: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub warranty_end: Option<Timestamp>,
    pub work_center_id: Option<WorkCenterId>,
    pub maintenance_team_id: Option<TeamId>,
    pub default_technician_id: Option<EmployeeId>,
    pub state: EquipmentState,
}

/// Partial update applied by `PATCH /api/equipment/{id}`.
///
/// Outer `None` leaves a field untouched. For nullable fields `Some(None)`
/// clears the stored value.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentPatch {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<CategoryId>,
    pub department_id: Option<DepartmentId>,
    pub employee_id: Option<Option<EmployeeId>>,
    pub location: Option<Option<String>>,
    pub purchase_date: Option<Option<Timestamp>>,
    pub warranty_end: Option<Option<Timestamp>>,
    pub work_center_id: Option<Option<WorkCenterId>>,
    pub maintenance_team_id: Option<TeamId>,
    pub default_technician_id: Option<Option<EmployeeId>>,
    pub state: Option<EquipmentState>,
}

/// Equipment enriched with the display names of its related records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDetails {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub category_name: Option<String>,
    pub department_name: Option<String>,
    pub employee_name: Option<String>,
    pub team_name: Option<String>,
    pub technician_name: Option<String>,
}

/// Optional filters for listing equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    pub department_id: Option<DepartmentId>,
    pub employee_id: Option<EmployeeId>,
    pub state: Option<EquipmentState>,
}

impl EquipmentFilter {
    /// Whether `equipment` passes every set filter.
    #[must_use]
    pub fn matches(&self, equipment: &Equipment) -> bool {
        self.department_id
            .is_none_or(|id| equipment.department_id == id)
            && self
                .employee_id
                .is_none_or(|id| equipment.employee_id == Some(id))
            && self.state.is_none_or(|state| equipment.state == state)
    }
}

impl Equipment {
    /// Create a builder for constructing a [`NewEquipment`].
    #[must_use]
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Apply a partial update and re-check invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if the patched record is invalid.
    pub fn apply(mut self, patch: EquipmentPatch, at: Timestamp) -> Result<Self, GearGuardError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(serial) = patch.serial_number {
            self.serial_number = serial;
        }
        if let Some(id) = patch.category_id {
            self.category_id = id;
        }
        if let Some(id) = patch.department_id {
            self.department_id = id;
        }
        if let Some(value) = patch.employee_id {
            self.employee_id = value;
        }
        if let Some(value) = patch.location {
            self.location = value;
        }
        if let Some(value) = patch.purchase_date {
            self.purchase_date = value;
        }
        if let Some(value) = patch.warranty_end {
            self.warranty_end = value;
        }
        if let Some(value) = patch.work_center_id {
            self.work_center_id = value;
        }
        if let Some(id) = patch.maintenance_team_id {
            self.maintenance_team_id = id;
        }
        if let Some(value) = patch.default_technician_id {
            self.default_technician_id = value;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        self.updated_at = at;
        validate_names(&self.name, &self.serial_number)?;
        Ok(self)
    }
}

impl NewEquipment {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when `name` or `serial_number`
    /// is empty.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        validate_names(&self.name, &self.serial_number)
    }
}

fn validate_names(name: &str, serial_number: &str) -> Result<(), GearGuardError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if serial_number.trim().is_empty() {
        return Err(ValidationError::MissingField("serialNumber").into());
    }
    Ok(())
}

/// Step-by-step builder for [`NewEquipment`].
#[derive(Debug, Default)]
pub struct EquipmentBuilder {
    name: Option<String>,
    serial_number: Option<String>,
    category_id: Option<CategoryId>,
    department_id: Option<DepartmentId>,
    employee_id: Option<EmployeeId>,
    location: Option<String>,
    purchase_date: Option<Timestamp>,
    warranty_end: Option<Timestamp>,
    work_center_id: Option<WorkCenterId>,
    maintenance_team_id: Option<TeamId>,
    default_technician_id: Option<EmployeeId>,
    state: Option<EquipmentState>,
}

impl EquipmentBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    #[must_use]
    pub fn category_id(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    #[must_use]
    pub fn department_id(mut self, id: DepartmentId) -> Self {
        self.department_id = Some(id);
        self
    }

    #[must_use]
    pub fn employee_id(mut self, id: Option<EmployeeId>) -> Self {
        self.employee_id = id;
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn purchase_date(mut self, date: Option<Timestamp>) -> Self {
        self.purchase_date = date;
        self
    }

    #[must_use]
    pub fn warranty_end(mut self, date: Option<Timestamp>) -> Self {
        self.warranty_end = date;
        self
    }

    #[must_use]
    pub fn work_center_id(mut self, id: Option<WorkCenterId>) -> Self {
        self.work_center_id = id;
        self
    }

    #[must_use]
    pub fn maintenance_team_id(mut self, id: Option<TeamId>) -> Self {
        self.maintenance_team_id = id;
        self
    }

    #[must_use]
    pub fn default_technician_id(mut self, id: Option<EmployeeId>) -> Self {
        self.default_technician_id = id;
        self
    }

    #[must_use]
    pub fn state(mut self, state: EquipmentState) -> Self {
        self.state = Some(state);
        self
    }

    /// Consume the builder, validate, and return a [`NewEquipment`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if a required field is missing
    /// or empty.
    pub fn build(self) -> Result<NewEquipment, GearGuardError> {
        let equipment = NewEquipment {
            name: self.name.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            category_id: self
                .category_id
                .ok_or(ValidationError::MissingField("categoryId"))?,
            department_id: self
                .department_id
                .ok_or(ValidationError::MissingField("departmentId"))?,
            employee_id: self.employee_id,
            location: self.location,
            purchase_date: self.purchase_date,
            warranty_end: self.warranty_end,
            work_center_id: self.work_center_id,
            maintenance_team_id: self.maintenance_team_id,
            default_technician_id: self.default_technician_id,
            state: self.state.unwrap_or_default(),
        };
        equipment.validate()?;
        Ok(equipment)
    }
}
