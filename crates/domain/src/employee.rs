//! Employee: a person who logs in, owns equipment or works on requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::{DepartmentId, EmployeeId, TeamId};
use crate::password::PasswordHash;
use crate::time::Timestamp;

/// Access role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Technician,
    Manager,
}

impl Role {
    /// Canonical text form, as stored and exchanged over the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Technician => "Technician",
            Self::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Self::User),
            "Technician" => Ok(Self::Technician),
            "Manager" => Ok(Self::Manager),
            other => Err(ValidationError::UnknownValue {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// A persisted employee. The password hash is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub role: Role,
    pub default_team_id: Option<TeamId>,
    pub created_at: Timestamp,
}

/// An employee that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub department_id: DepartmentId,
    pub role: Role,
    pub default_team_id: Option<TeamId>,
}

/// Optional filters for listing employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub role: Option<Role>,
    pub team_id: Option<TeamId>,
}

impl EmployeeFilter {
    /// Whether `employee` passes every set filter.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.role.is_none_or(|role| employee.role == role)
            && self
                .team_id
                .is_none_or(|team| employee.default_team_id == Some(team))
    }
}

impl Employee {
    /// Create a builder for constructing a [`NewEmployee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }
}

impl NewEmployee {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when `name` is empty or the
    /// email address is malformed.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        validate_email(&self.email)?;
        Ok(())
    }
}

/// Minimal shape check: something on both sides of a single `@`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] when the shape is wrong.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Step-by-step builder for [`NewEmployee`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<PasswordHash>,
    department_id: Option<DepartmentId>,
    role: Option<Role>,
    default_team_id: Option<TeamId>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password_hash(mut self, hash: PasswordHash) -> Self {
        self.password_hash = Some(hash);
        self
    }

    #[must_use]
    pub fn department_id(mut self, id: DepartmentId) -> Self {
        self.department_id = Some(id);
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn default_team_id(mut self, id: TeamId) -> Self {
        self.default_team_id = Some(id);
        self
    }

    /// Consume the builder, validate, and return a [`NewEmployee`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if a required field is missing
    /// or an invariant fails.
    pub fn build(self) -> Result<NewEmployee, GearGuardError> {
        let employee = NewEmployee {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password_hash: self
                .password_hash
                .ok_or(ValidationError::MissingField("password"))?,
            department_id: self
                .department_id
                .ok_or(ValidationError::MissingField("departmentId"))?,
            role: self.role.unwrap_or_default(),
            default_team_id: self.default_team_id,
        };
        employee.validate()?;
        Ok(employee)
    }
}
