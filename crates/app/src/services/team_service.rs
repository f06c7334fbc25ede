//! Team service: use-cases for maintenance teams.

use gearguard_domain::employee::EmployeeFilter;
use gearguard_domain::error::{GearGuardError, NotFoundError};
use gearguard_domain::id::TeamId;
use gearguard_domain::team::{MaintenanceTeam, NewTeam, TeamSummary};

use crate::ports::{EmployeeRepository, TeamRepository};

/// Application service for maintenance teams.
pub struct TeamService<T, E> {
    teams: T,
    employees: E,
}

impl<T: TeamRepository, E: EmployeeRepository> TeamService<T, E> {
    /// Create a new service backed by the given repositories.
    pub fn new(teams: T, employees: E) -> Self {
        Self { teams, employees }
    }

    /// Create a team after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_team(&self, team: NewTeam) -> Result<MaintenanceTeam, GearGuardError> {
        team.validate()?;
        self.teams.create(team).await
    }

    /// Look up a team by id.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no team with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_team(&self, id: TeamId) -> Result<MaintenanceTeam, GearGuardError> {
        self.teams.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Team",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List teams by name, each with the number of employees defaulting to it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_teams(&self) -> Result<Vec<TeamSummary>, GearGuardError> {
        let teams = self.teams.get_all().await?;
        let employees = self.employees.get_all(EmployeeFilter::default()).await?;
        Ok(teams
            .into_iter()
            .map(|team| {
                let employee_count = employees
                    .iter()
                    .filter(|e| e.default_team_id == Some(team.id))
                    .count();
                TeamSummary {
                    team,
                    employee_count,
                }
            })
            .collect())
    }
}
