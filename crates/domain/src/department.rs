//! Department: an organisational unit that employees and equipment belong to.

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::DepartmentId;

/// Name given to the department created for the first signup on an empty store.
pub const DEFAULT_DEPARTMENT_NAME: &str = "General";

/// A persisted department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: Option<String>,
}

/// A department that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub code: Option<String>,
}

impl Department {
    /// Create a builder for constructing a [`NewDepartment`].
    #[must_use]
    pub fn builder() -> DepartmentBuilder {
        DepartmentBuilder::default()
    }
}

impl NewDepartment {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewDepartment`].
#[derive(Debug, Default)]
pub struct DepartmentBuilder {
    name: Option<String>,
    code: Option<String>,
}

impl DepartmentBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewDepartment`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewDepartment, GearGuardError> {
        let department = NewDepartment {
            name: self.name.unwrap_or_default(),
            code: self.code,
        };
        department.validate()?;
        Ok(department)
    }
}
