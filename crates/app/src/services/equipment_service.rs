//! Equipment service: use-cases for managing equipment.

use gearguard_domain::equipment::{
    Equipment, EquipmentDetails, EquipmentFilter, EquipmentPatch, NewEquipment,
};
use gearguard_domain::error::{GearGuardError, NotFoundError, ValidationError};
use gearguard_domain::id::{CategoryId, DepartmentId, EmployeeId, EquipmentId, TeamId, WorkCenterId};
use gearguard_domain::time::now;

use crate::ports::{
    CategoryRepository, DepartmentRepository, EmployeeRepository, EquipmentRepository,
    RequestRepository, TeamRepository, WorkCenterRepository,
};
use crate::services::distinct;

/// Records a piece of equipment points at, checked before it is written.
#[derive(Default)]
struct References {
    category: Option<CategoryId>,
    department: Option<DepartmentId>,
    team: Option<TeamId>,
    owner: Option<EmployeeId>,
    technician: Option<EmployeeId>,
    work_center: Option<WorkCenterId>,
}

/// Application service for equipment CRUD operations.
pub struct EquipmentService<Q, C, R, D, T, E, W> {
    equipment: Q,
    categories: C,
    requests: R,
    departments: D,
    teams: T,
    employees: E,
    work_centers: W,
}

impl<Q, C, R, D, T, E, W> EquipmentService<Q, C, R, D, T, E, W>
where
    Q: EquipmentRepository,
    C: CategoryRepository,
    R: RequestRepository,
    D: DepartmentRepository,
    T: TeamRepository,
    E: EmployeeRepository,
    W: WorkCenterRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(
        equipment: Q,
        categories: C,
        requests: R,
        departments: D,
        teams: T,
        employees: E,
        work_centers: W,
    ) -> Self {
        Self {
            equipment,
            categories,
            requests,
            departments,
            teams,
            employees,
            work_centers,
        }
    }

    /// Reject references to records that do not exist.
    async fn check_references(&self, refs: References) -> Result<(), GearGuardError> {
        if let Some(id) = refs.category
            && self.categories.get_by_id(id).await?.is_none()
        {
            return Err(unknown("categoryId", id));
        }
        if let Some(id) = refs.department
            && self.departments.get_by_id(id).await?.is_none()
        {
            return Err(unknown("departmentId", id));
        }
        if let Some(id) = refs.team
            && self.teams.get_by_id(id).await?.is_none()
        {
            return Err(unknown("maintenanceTeamId", id));
        }
        let people = [
            ("employeeId", refs.owner),
            ("defaultTechnicianId", refs.technician),
        ];
        for (field, employee) in people {
            if let Some(id) = employee
                && self.employees.get_by_id(id).await?.is_none()
            {
                return Err(unknown(field, id));
            }
        }
        if let Some(id) = refs.work_center
            && self.work_centers.get_by_id(id).await?.is_none()
        {
            return Err(unknown("workCenterId", id));
        }
        Ok(())
    }

    /// Attach related record names, one lookup per table.
    async fn with_details(
        &self,
        equipment: Vec<Equipment>,
    ) -> Result<Vec<EquipmentDetails>, GearGuardError> {
        let categories = self
            .categories
            .names(&distinct(equipment.iter().map(|e| e.category_id)))
            .await?;
        let departments = self
            .departments
            .names(&distinct(equipment.iter().map(|e| e.department_id)))
            .await?;
        let teams = self
            .teams
            .names(&distinct(equipment.iter().map(|e| e.maintenance_team_id)))
            .await?;
        let people = distinct(
            equipment
                .iter()
                .flat_map(|e| [e.employee_id, e.default_technician_id])
                .flatten(),
        );
        let employees = self.employees.names(&people).await?;

        Ok(equipment
            .into_iter()
            .map(|equipment| EquipmentDetails {
                category_name: categories.get(&equipment.category_id).cloned(),
                department_name: departments.get(&equipment.department_id).cloned(),
                employee_name: equipment
                    .employee_id
                    .and_then(|id| employees.get(&id).cloned()),
                team_name: teams.get(&equipment.maintenance_team_id).cloned(),
                technician_name: equipment
                    .default_technician_id
                    .and_then(|id| employees.get(&id).cloned()),
                equipment,
            })
            .collect())
    }

    async fn one_with_details(
        &self,
        equipment: Equipment,
    ) -> Result<EquipmentDetails, GearGuardError> {
        let id = equipment.id;
        self.with_details(vec![equipment])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    async fn find(&self, id: EquipmentId) -> Result<Equipment, GearGuardError> {
        self.equipment
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Register new equipment.
    ///
    /// Without an explicit maintenance team, the category's responsible team
    /// takes over.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail or a
    /// referenced record does not exist, or a storage error.
    #[tracing::instrument(skip(self, equipment), fields(name = %equipment.name))]
    pub async fn create_equipment(
        &self,
        mut equipment: NewEquipment,
    ) -> Result<EquipmentDetails, GearGuardError> {
        equipment.validate()?;
        let category = self
            .categories
            .get_by_id(equipment.category_id)
            .await?
            .ok_or_else(|| unknown("categoryId", equipment.category_id))?;
        self.check_references(References {
            department: Some(equipment.department_id),
            team: equipment.maintenance_team_id,
            owner: equipment.employee_id,
            technician: equipment.default_technician_id,
            work_center: equipment.work_center_id,
            ..References::default()
        })
        .await?;
        if equipment.maintenance_team_id.is_none() {
            tracing::debug!(team_id = %category.responsible_team_id, "inheriting category team");
            equipment.maintenance_team_id = Some(category.responsible_team_id);
        }
        let created = self.equipment.create(equipment).await?;
        self.one_with_details(created).await
    }

    /// Look up equipment by id, with related record names.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no equipment with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_equipment(&self, id: EquipmentId) -> Result<EquipmentDetails, GearGuardError> {
        let equipment = self.find(id).await?;
        self.one_with_details(equipment).await
    }

    /// List equipment newest first, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_equipment(
        &self,
        filter: EquipmentFilter,
    ) -> Result<Vec<EquipmentDetails>, GearGuardError> {
        let equipment = self.equipment.get_all(filter).await?;
        self.with_details(equipment).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no equipment with `id`
    /// exists, [`GearGuardError::Validation`] if the result is invalid or
    /// points at a missing record, or a storage error.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_equipment(
        &self,
        id: EquipmentId,
        patch: EquipmentPatch,
    ) -> Result<EquipmentDetails, GearGuardError> {
        let current = self.find(id).await?;
        self.check_references(References {
            category: patch.category_id,
            department: patch.department_id,
            team: patch.maintenance_team_id,
            owner: patch.employee_id.flatten(),
            technician: patch.default_technician_id.flatten(),
            work_center: patch.work_center_id.flatten(),
        })
        .await?;
        let updated = current.apply(patch, now())?;
        let updated = self.equipment.update(updated).await?;
        self.one_with_details(updated).await
    }

    /// Delete equipment and every request filed against it.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no equipment with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_equipment(&self, id: EquipmentId) -> Result<(), GearGuardError> {
        self.find(id).await?;
        self.equipment.delete(id).await
    }

    /// Number of `New` or `In Progress` requests against the equipment.
    ///
    /// Unknown equipment simply has none.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn open_request_count(&self, id: EquipmentId) -> Result<usize, GearGuardError> {
        self.requests.count_open_for_equipment(id).await
    }
}

fn unknown(field: &'static str, id: impl ToString) -> GearGuardError {
    ValidationError::UnknownValue {
        field,
        value: id.to_string(),
    }
    .into()
}

fn not_found(id: EquipmentId) -> GearGuardError {
    NotFoundError {
        entity: "Equipment",
        id: id.to_string(),
    }
    .into()
}
