//! Maintenance team: a group of technicians responsible for equipment.

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::TeamId;

/// A persisted maintenance team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTeam {
    pub id: TeamId,
    pub name: String,
    pub description: Option<String>,
    pub members_count: i64,
}

/// A team as listed, with the number of employees defaulting to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(flatten)]
    pub team: MaintenanceTeam,
    pub employee_count: usize,
}

/// A team that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub description: Option<String>,
    pub members_count: i64,
}

impl MaintenanceTeam {
    /// Create a builder for constructing a [`NewTeam`].
    #[must_use]
    pub fn builder() -> TeamBuilder {
        TeamBuilder::default()
    }
}

impl NewTeam {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when `name` is empty or
    /// `members_count` is negative.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.members_count < 0 {
            return Err(ValidationError::Negative("membersCount").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewTeam`].
#[derive(Debug, Default)]
pub struct TeamBuilder {
    name: Option<String>,
    description: Option<String>,
    members_count: Option<i64>,
}

impl TeamBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn members_count(mut self, count: i64) -> Self {
        self.members_count = Some(count);
        self
    }

    /// Consume the builder, validate, and return a [`NewTeam`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail.
    pub fn build(self) -> Result<NewTeam, GearGuardError> {
        let team = NewTeam {
            name: self.name.unwrap_or_default(),
            description: self.description,
            members_count: self.members_count.unwrap_or(0),
        };
        team.validate()?;
        Ok(team)
    }
}
