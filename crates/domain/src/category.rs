//! Equipment category: groups equipment and names the team responsible for it.

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::{CategoryId, TeamId};

/// A persisted equipment category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentCategory {
    pub id: CategoryId,
    pub name: String,
    pub responsible_team_id: TeamId,
    pub company_name: Option<String>,
}

/// A category as listed: its responsible team's name and how much equipment uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: EquipmentCategory,
    pub responsible_team_name: Option<String>,
    pub equipment_count: usize,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub responsible_team_id: TeamId,
    pub company_name: Option<String>,
}

impl EquipmentCategory {
    /// Create a builder for constructing a [`NewCategory`].
    #[must_use]
    pub fn builder() -> CategoryBuilder {
        CategoryBuilder::default()
    }
}

impl NewCategory {
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

/// Step-by-step builder for [`NewCategory`].
#[derive(Debug, Default)]
pub struct CategoryBuilder {
    name: Option<String>,
    responsible_team_id: Option<TeamId>,
    company_name: Option<String>,
}

impl CategoryBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn responsible_team_id(mut self, id: TeamId) -> Self {
        self.responsible_team_id = Some(id);
        self
    }

    #[must_use]
    pub fn company_name(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewCategory`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if the name or team is missing.
    pub fn build(self) -> Result<NewCategory, GearGuardError> {
        let category = NewCategory {
            name: self.name.unwrap_or_default(),
            responsible_team_id: self
                .responsible_team_id
                .ok_or(ValidationError::MissingField("responsibleTeamId"))?,
            company_name: self.company_name,
        };
        category.validate()?;
        Ok(category)
    }
}
