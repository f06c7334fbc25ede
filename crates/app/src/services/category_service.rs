//! Category service: use-cases for equipment categories.

use std::collections::HashMap;

use gearguard_domain::category::{CategorySummary, EquipmentCategory, NewCategory};
use gearguard_domain::equipment::EquipmentFilter;
use gearguard_domain::error::{GearGuardError, NotFoundError, ValidationError};
use gearguard_domain::id::CategoryId;

use crate::ports::{CategoryRepository, EquipmentRepository, TeamRepository};

/// Application service for equipment categories.
pub struct CategoryService<C, T, Q> {
    categories: C,
    teams: T,
    equipment: Q,
}

impl<C, T, Q> CategoryService<C, T, Q>
where
    C: CategoryRepository,
    T: TeamRepository,
    Q: EquipmentRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(categories: C, teams: T, equipment: Q) -> Self {
        Self {
            categories,
            teams,
            equipment,
        }
    }

    /// Create a category owned by an existing team.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail or the
    /// responsible team does not exist, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<EquipmentCategory, GearGuardError> {
        category.validate()?;
        if self
            .teams
            .get_by_id(category.responsible_team_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownValue {
                field: "responsibleTeamId",
                value: category.responsible_team_id.to_string(),
            }
            .into());
        }
        self.categories.create(category).await
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no category with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<EquipmentCategory, GearGuardError> {
        self.categories.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Equipment category",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List categories by name with their team name and equipment count.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, GearGuardError> {
        let categories = self.categories.get_all().await?;
        let team_names: HashMap<_, _> = self
            .teams
            .get_all()
            .await?
            .into_iter()
            .map(|team| (team.id, team.name))
            .collect();
        let mut counts: HashMap<CategoryId, usize> = HashMap::new();
        for equipment in self.equipment.get_all(EquipmentFilter::default()).await? {
            *counts.entry(equipment.category_id).or_default() += 1;
        }
        Ok(categories
            .into_iter()
            .map(|category| CategorySummary {
                responsible_team_name: team_names.get(&category.responsible_team_id).cloned(),
                equipment_count: counts.get(&category.id).copied().unwrap_or_default(),
                category,
            })
            .collect())
    }
}
