//! Storage port: repository traits for persistence.
//!
//! Identifiers are assigned by the store, so every `create` takes a `New*`
//! draft and returns the persisted record.

use std::collections::HashMap;
use std::future::Future;

use gearguard_domain::category::{EquipmentCategory, NewCategory};
use gearguard_domain::department::{Department, NewDepartment};
use gearguard_domain::employee::{Employee, EmployeeFilter, NewEmployee};
use gearguard_domain::equipment::{Equipment, EquipmentFilter, NewEquipment};
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::{
    CategoryId, DepartmentId, EmployeeId, EquipmentId, RequestId, TeamId, WorkCenterId,
};
use gearguard_domain::password::PasswordHash;
use gearguard_domain::request::{
    MaintenanceRequest, NewMaintenanceRequest, RequestFilter, RequestState,
};
use gearguard_domain::team::{MaintenanceTeam, NewTeam};
use gearguard_domain::time::Timestamp;
use gearguard_domain::work_center::{NewWorkCenter, WorkCenter};

/// Repository for [`Department`]s.
pub trait DepartmentRepository {
    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<Department, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, GearGuardError>> + Send;

    /// Names keyed by id for the given ids. Unknown ids are left out.
    fn names(
        &self,
        ids: &[DepartmentId],
    ) -> impl Future<Output = Result<HashMap<DepartmentId, String>, GearGuardError>> + Send;

    /// All departments ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Department>, GearGuardError>> + Send;
}

/// Repository for [`MaintenanceTeam`]s.
pub trait TeamRepository {
    fn create(
        &self,
        team: NewTeam,
    ) -> impl Future<Output = Result<MaintenanceTeam, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: TeamId,
    ) -> impl Future<Output = Result<Option<MaintenanceTeam>, GearGuardError>> + Send;

    /// Names keyed by id for the given ids. Unknown ids are left out.
    fn names(
        &self,
        ids: &[TeamId],
    ) -> impl Future<Output = Result<HashMap<TeamId, String>, GearGuardError>> + Send;

    /// All teams ordered by name.
    fn get_all(&self)
    -> impl Future<Output = Result<Vec<MaintenanceTeam>, GearGuardError>> + Send;
}

/// Repository for [`Employee`]s and their credentials.
pub trait EmployeeRepository {
    /// Store a new employee.
    ///
    /// Implementations report a duplicate email as
    /// [`ValidationError::EmailTaken`](gearguard_domain::error::ValidationError::EmailTaken).
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, GearGuardError>> + Send;

    /// Names keyed by id for the given ids. Unknown ids are left out.
    fn names(
        &self,
        ids: &[EmployeeId],
    ) -> impl Future<Output = Result<HashMap<EmployeeId, String>, GearGuardError>> + Send;

    /// Look up an employee together with the stored password hash.
    fn find_credentials(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<(Employee, PasswordHash)>, GearGuardError>> + Send;

    /// Employees matching `filter`, ordered by name.
    fn get_all(
        &self,
        filter: EmployeeFilter,
    ) -> impl Future<Output = Result<Vec<Employee>, GearGuardError>> + Send;
}

/// Repository for [`EquipmentCategory`]s.
pub trait CategoryRepository {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<EquipmentCategory, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<EquipmentCategory>, GearGuardError>> + Send;

    /// Names keyed by id for the given ids. Unknown ids are left out.
    fn names(
        &self,
        ids: &[CategoryId],
    ) -> impl Future<Output = Result<HashMap<CategoryId, String>, GearGuardError>> + Send;

    /// All categories ordered by name.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<EquipmentCategory>, GearGuardError>> + Send;
}

/// Repository for [`Equipment`].
pub trait EquipmentRepository {
    /// Store new equipment. `maintenance_team_id` must already be resolved.
    fn create(
        &self,
        equipment: NewEquipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, GearGuardError>> + Send;

    /// Names keyed by id for the given ids. Unknown ids are left out.
    fn names(
        &self,
        ids: &[EquipmentId],
    ) -> impl Future<Output = Result<HashMap<EquipmentId, String>, GearGuardError>> + Send;

    /// Equipment matching `filter`, newest first.
    fn get_all(
        &self,
        filter: EquipmentFilter,
    ) -> impl Future<Output = Result<Vec<Equipment>, GearGuardError>> + Send;

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send;

    /// Delete equipment together with the requests filed against it.
    fn delete(&self, id: EquipmentId) -> impl Future<Output = Result<(), GearGuardError>> + Send;
}

/// Repository for [`MaintenanceRequest`]s.
pub trait RequestRepository {
    /// Store a request under the next free number for `year`.
    ///
    /// Allocation and insert happen as one unit, so concurrent callers never
    /// receive the same number.
    fn create(
        &self,
        request: NewMaintenanceRequest,
        year: i32,
    ) -> impl Future<Output = Result<MaintenanceRequest, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: RequestId,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send;

    /// Requests matching `filter`, newest first.
    fn get_all(
        &self,
        filter: RequestFilter,
    ) -> impl Future<Output = Result<Vec<MaintenanceRequest>, GearGuardError>> + Send;

    /// Move a request to `state`.
    ///
    /// When [`RequestState::scraps_equipment`] holds, the linked equipment is
    /// set to `Scrap` in the same unit of work. Returns `None` when the
    /// request does not exist.
    fn update_state(
        &self,
        id: RequestId,
        state: RequestState,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send;

    fn delete(&self, id: RequestId) -> impl Future<Output = Result<(), GearGuardError>> + Send;

    /// Number of `New` or `In Progress` requests filed against `equipment_id`.
    fn count_open_for_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<usize, GearGuardError>> + Send;
}

/// Repository for [`WorkCenter`]s.
pub trait WorkCenterRepository {
    fn create(
        &self,
        work_center: NewWorkCenter,
    ) -> impl Future<Output = Result<WorkCenter, GearGuardError>> + Send;

    fn get_by_id(
        &self,
        id: WorkCenterId,
    ) -> impl Future<Output = Result<Option<WorkCenter>, GearGuardError>> + Send;

    /// All work centers ordered by code.
    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkCenter>, GearGuardError>> + Send;

    fn delete(&self, id: WorkCenterId)
    -> impl Future<Output = Result<(), GearGuardError>> + Send;
}

/// A complete set of repositories sharing one backing store.
///
/// Repositories are cheap handles; each accessor returns a fresh clone so
/// that several services can hold the same table.
pub trait Storage: Send + Sync + 'static {
    type Departments: DepartmentRepository + Clone + Send + Sync + 'static;
    type Teams: TeamRepository + Clone + Send + Sync + 'static;
    type Employees: EmployeeRepository + Clone + Send + Sync + 'static;
    type Categories: CategoryRepository + Clone + Send + Sync + 'static;
    type Equipment: EquipmentRepository + Clone + Send + Sync + 'static;
    type Requests: RequestRepository + Clone + Send + Sync + 'static;
    type WorkCenters: WorkCenterRepository + Clone + Send + Sync + 'static;

    fn departments(&self) -> Self::Departments;
    fn teams(&self) -> Self::Teams;
    fn employees(&self) -> Self::Employees;
    fn categories(&self) -> Self::Categories;
    fn equipment(&self) -> Self::Equipment;
    fn requests(&self) -> Self::Requests;
    fn work_centers(&self) -> Self::WorkCenters;
}
