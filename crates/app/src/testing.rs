//! In-memory implementation of every repository port, shared by service tests.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::{Arc, Mutex};

use gearguard_domain::category::{EquipmentCategory, NewCategory};
use gearguard_domain::department::{Department, NewDepartment};
use gearguard_domain::employee::{Employee, EmployeeFilter, NewEmployee};
use gearguard_domain::equipment::{Equipment, EquipmentFilter, EquipmentState, NewEquipment};
use gearguard_domain::error::{GearGuardError, ValidationError};
use gearguard_domain::id::{
    CategoryId, DepartmentId, EmployeeId, EquipmentId, RequestId, TeamId, WorkCenterId,
};
use gearguard_domain::password::PasswordHash;
use gearguard_domain::request::{
    MaintenanceRequest, NewMaintenanceRequest, RequestFilter, RequestNumber, RequestState,
};
use gearguard_domain::team::{MaintenanceTeam, NewTeam};
use gearguard_domain::time::{Timestamp, now};
use gearguard_domain::work_center::{NewWorkCenter, WorkCenter};

use crate::ports::{
    CategoryRepository, DepartmentRepository, EmployeeRepository, EquipmentRepository,
    RequestRepository, Storage, TeamRepository, WorkCenterRepository,
};

#[derive(Default)]
struct Tables {
    last_id: i64,
    departments: BTreeMap<i64, Department>,
    teams: BTreeMap<i64, MaintenanceTeam>,
    employees: BTreeMap<i64, (Employee, PasswordHash)>,
    categories: BTreeMap<i64, EquipmentCategory>,
    equipment: BTreeMap<i64, Equipment>,
    requests: BTreeMap<i64, MaintenanceRequest>,
    work_centers: BTreeMap<i64, WorkCenter>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// All tables behind one lock, so cross-table updates are atomic.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(&mut tables)
    }
}

fn names_of<I: Copy + Eq + std::hash::Hash>(
    ids: &[I],
    lookup: impl Fn(I) -> Option<String>,
) -> HashMap<I, String> {
    ids.iter()
        .filter_map(|&id| lookup(id).map(|name| (id, name)))
        .collect()
}

fn sorted_by<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}

impl DepartmentRepository for InMemoryStore {
    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<Department, GearGuardError>> + Send {
        let created = self.with(|t| {
            let id = t.next_id();
            let record = Department {
                id: DepartmentId::new(id),
                name: department.name,
                code: department.code,
            };
            t.departments.insert(id, record.clone());
            record
        });
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, GearGuardError>> + Send {
        let found = self.with(|t| t.departments.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn names(
        &self,
        ids: &[DepartmentId],
    ) -> impl Future<Output = Result<HashMap<DepartmentId, String>, GearGuardError>> + Send {
        let names = self.with(|t| {
            names_of(ids, |id| t.departments.get(&id.get()).map(|d| d.name.clone()))
        });
        async { Ok(names) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Department>, GearGuardError>> + Send {
        let all = self.with(|t| t.departments.values().cloned().collect());
        async { Ok(sorted_by(all, |d: &Department| d.name.clone())) }
    }
}

impl TeamRepository for InMemoryStore {
    fn create(
        &self,
        team: NewTeam,
    ) -> impl Future<Output = Result<MaintenanceTeam, GearGuardError>> + Send {
        let created = self.with(|t| {
            let id = t.next_id();
            let record = MaintenanceTeam {
                id: TeamId::new(id),
                name: team.name,
                description: team.description,
                members_count: team.members_count,
            };
            t.teams.insert(id, record.clone());
            record
        });
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: TeamId,
    ) -> impl Future<Output = Result<Option<MaintenanceTeam>, GearGuardError>> + Send {
        let found = self.with(|t| t.teams.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn names(
        &self,
        ids: &[TeamId],
    ) -> impl Future<Output = Result<HashMap<TeamId, String>, GearGuardError>> + Send {
        let names = self.with(|t| {
            names_of(ids, |id| t.teams.get(&id.get()).map(|team| team.name.clone()))
        });
        async { Ok(names) }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<MaintenanceTeam>, GearGuardError>> + Send {
        let all = self.with(|t| t.teams.values().cloned().collect());
        async { Ok(sorted_by(all, |team: &MaintenanceTeam| team.name.clone())) }
    }
}

impl EmployeeRepository for InMemoryStore {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, GearGuardError>> + Send {
        let result: Result<Employee, GearGuardError> = self.with(|t| {
            if t.employees.values().any(|(e, _)| e.email == employee.email) {
                return Err(ValidationError::EmailTaken.into());
            }
            let id = t.next_id();
            let record = Employee {
                id: EmployeeId::new(id),
                name: employee.name,
                email: employee.email,
                department_id: employee.department_id,
                role: employee.role,
                default_team_id: employee.default_team_id,
                created_at: now(),
            };
            t.employees
                .insert(id, (record.clone(), employee.password_hash));
            Ok(record)
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, GearGuardError>> + Send {
        let found = self.with(|t| t.employees.get(&id.get()).map(|(e, _)| e.clone()));
        async { Ok(found) }
    }

    fn names(
        &self,
        ids: &[EmployeeId],
    ) -> impl Future<Output = Result<HashMap<EmployeeId, String>, GearGuardError>> + Send {
        let names = self.with(|t| {
            names_of(ids, |id| t.employees.get(&id.get()).map(|(e, _)| e.name.clone()))
        });
        async { Ok(names) }
    }

    fn find_credentials(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<(Employee, PasswordHash)>, GearGuardError>> + Send
    {
        let found = self.with(|t| {
            t.employees
                .values()
                .find(|(e, _)| e.email == email)
                .cloned()
        });
        async { Ok(found) }
    }

    fn get_all(
        &self,
        filter: EmployeeFilter,
    ) -> impl Future<Output = Result<Vec<Employee>, GearGuardError>> + Send {
        let all = self.with(|t| {
            t.employees
                .values()
                .map(|(e, _)| e.clone())
                .filter(|e| filter.matches(e))
                .collect()
        });
        async { Ok(sorted_by(all, |e: &Employee| e.name.clone())) }
    }
}

impl CategoryRepository for InMemoryStore {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<EquipmentCategory, GearGuardError>> + Send {
        let created = self.with(|t| {
            let id = t.next_id();
            let record = EquipmentCategory {
                id: CategoryId::new(id),
                name: category.name,
                responsible_team_id: category.responsible_team_id,
                company_name: category.company_name,
            };
            t.categories.insert(id, record.clone());
            record
        });
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<EquipmentCategory>, GearGuardError>> + Send {
        let found = self.with(|t| t.categories.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn names(
        &self,
        ids: &[CategoryId],
    ) -> impl Future<Output = Result<HashMap<CategoryId, String>, GearGuardError>> + Send {
        let names = self.with(|t| {
            names_of(ids, |id| t.categories.get(&id.get()).map(|c| c.name.clone()))
        });
        async { Ok(names) }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<EquipmentCategory>, GearGuardError>> + Send {
        let all = self.with(|t| t.categories.values().cloned().collect());
        async { Ok(sorted_by(all, |c: &EquipmentCategory| c.name.clone())) }
    }
}

impl EquipmentRepository for InMemoryStore {
    fn create(
        &self,
        equipment: NewEquipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send {
        let result: Result<Equipment, GearGuardError> = self.with(|t| {
            let team = equipment
                .maintenance_team_id
                .ok_or(ValidationError::MissingField("maintenanceTeamId"))?;
            let id = t.next_id();
            let at = now();
            let record = Equipment {
                id: EquipmentId::new(id),
                name: equipment.name,
                serial_number: equipment.serial_number,
                category_id: equipment.category_id,
                department_id: equipment.department_id,
                employee_id: equipment.employee_id,
                location: equipment.location,
                purchase_date: equipment.purchase_date,
                warranty_end: equipment.warranty_end,
                work_center_id: equipment.work_center_id,
                maintenance_team_id: team,
                default_technician_id: equipment.default_technician_id,
                state: equipment.state,
                created_at: at,
                updated_at: at,
            };
            t.equipment.insert(id, record.clone());
            Ok(record)
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, GearGuardError>> + Send {
        let found = self.with(|t| t.equipment.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn names(
        &self,
        ids: &[EquipmentId],
    ) -> impl Future<Output = Result<HashMap<EquipmentId, String>, GearGuardError>> + Send {
        let names = self.with(|t| {
            names_of(ids, |id| t.equipment.get(&id.get()).map(|e| e.name.clone()))
        });
        async { Ok(names) }
    }

    fn get_all(
        &self,
        filter: EquipmentFilter,
    ) -> impl Future<Output = Result<Vec<Equipment>, GearGuardError>> + Send {
        // Ids grow monotonically, so reverse id order is newest first.
        let all = self.with(|t| {
            t.equipment
                .values()
                .rev()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect()
        });
        async { Ok(all) }
    }

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send {
        self.with(|t| t.equipment.insert(equipment.id.get(), equipment.clone()));
        async { Ok(equipment) }
    }

    fn delete(&self, id: EquipmentId) -> impl Future<Output = Result<(), GearGuardError>> + Send {
        self.with(|t| {
            t.equipment.remove(&id.get());
            t.requests.retain(|_, r| r.equipment_id != id);
        });
        async { Ok(()) }
    }
}

impl RequestRepository for InMemoryStore {
    fn create(
        &self,
        request: NewMaintenanceRequest,
        year: i32,
    ) -> impl Future<Output = Result<MaintenanceRequest, GearGuardError>> + Send {
        let created = self.with(|t| {
            let last = t
                .requests
                .values()
                .map(|r| r.request_number)
                .filter(|n| n.year() == year)
                .max_by_key(|n| n.sequence());
            let id = t.next_id();
            let at = now();
            let record = MaintenanceRequest {
                id: RequestId::new(id),
                request_number: RequestNumber::next(year, last),
                request_type: request.request_type,
                subject: request.subject,
                description: request.description,
                equipment_id: request.equipment_id,
                equipment_category_id: request.equipment_category_id,
                department_id: request.department_id,
                employee_id: request.employee_id,
                maintenance_team_id: request.maintenance_team_id,
                assigned_technician_id: request.assigned_technician_id,
                scheduled_date: request.scheduled_date,
                start_datetime: request.start_datetime,
                duration_hours: request.duration_hours,
                state: request.state,
                created_at: at,
                updated_at: at,
            };
            t.requests.insert(id, record.clone());
            record
        });
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: RequestId,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send {
        let found = self.with(|t| t.requests.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn get_all(
        &self,
        filter: RequestFilter,
    ) -> impl Future<Output = Result<Vec<MaintenanceRequest>, GearGuardError>> + Send {
        let all = self.with(|t| {
            t.requests
                .values()
                .rev()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect()
        });
        async { Ok(all) }
    }

    fn update_state(
        &self,
        id: RequestId,
        state: RequestState,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send {
        let updated = self.with(|t| {
            let request = t.requests.get_mut(&id.get())?;
            request.state = state;
            request.updated_at = at;
            let request = request.clone();
            if state.scraps_equipment()
                && let Some(equipment) = t.equipment.get_mut(&request.equipment_id.get())
            {
                equipment.state = EquipmentState::Scrap;
                equipment.updated_at = at;
            }
            Some(request)
        });
        async { Ok(updated) }
    }

    fn delete(&self, id: RequestId) -> impl Future<Output = Result<(), GearGuardError>> + Send {
        self.with(|t| t.requests.remove(&id.get()));
        async { Ok(()) }
    }

    fn count_open_for_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<usize, GearGuardError>> + Send {
        let count = self.with(|t| {
            t.requests
                .values()
                .filter(|r| r.equipment_id == equipment_id && r.state.is_open())
                .count()
        });
        async move { Ok(count) }
    }
}

impl WorkCenterRepository for InMemoryStore {
    fn create(
        &self,
        work_center: NewWorkCenter,
    ) -> impl Future<Output = Result<WorkCenter, GearGuardError>> + Send {
        let created = self.with(|t| {
            let id = t.next_id();
            let record = WorkCenter {
                id: WorkCenterId::new(id),
                code: work_center.code,
                name: work_center.name,
                tag: work_center.tag,
                alternative_workcenters: work_center.alternative_workcenters,
                cost_per_hour: work_center.cost_per_hour,
                capacity_time_efficiency: work_center.capacity_time_efficiency,
                oee_target: work_center.oee_target,
                capacity_per_day: work_center.capacity_per_day,
            };
            t.work_centers.insert(id, record.clone());
            record
        });
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: WorkCenterId,
    ) -> impl Future<Output = Result<Option<WorkCenter>, GearGuardError>> + Send {
        let found = self.with(|t| t.work_centers.get(&id.get()).cloned());
        async { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkCenter>, GearGuardError>> + Send {
        let all = self.with(|t| t.work_centers.values().cloned().collect());
        async { Ok(sorted_by(all, |w: &WorkCenter| w.code.clone())) }
    }

    fn delete(
        &self,
        id: WorkCenterId,
    ) -> impl Future<Output = Result<(), GearGuardError>> + Send {
        self.with(|t| t.work_centers.remove(&id.get()));
        async { Ok(()) }
    }
}

impl Storage for InMemoryStore {
    type Departments = Self;
    type Teams = Self;
    type Employees = Self;
    type Categories = Self;
    type Equipment = Self;
    type Requests = Self;
    type WorkCenters = Self;

    fn departments(&self) -> Self {
        self.clone()
    }
    fn teams(&self) -> Self {
        self.clone()
    }
    fn employees(&self) -> Self {
        self.clone()
    }
    fn categories(&self) -> Self {
        self.clone()
    }
    fn equipment(&self) -> Self {
        self.clone()
    }
    fn requests(&self) -> Self {
        self.clone()
    }
    fn work_centers(&self) -> Self {
        self.clone()
    }
}

/// Seed a team, department, category and piece of equipment.
pub(crate) async fn seed_equipment(store: &InMemoryStore) -> Equipment {
    let team = TeamRepository::create(
        store,
        MaintenanceTeam::builder().name("Mechanics").build().unwrap(),
    )
    .await
    .unwrap();
    let department = DepartmentRepository::create(
        store,
        Department::builder().name("Production").build().unwrap(),
    )
    .await
    .unwrap();
    let category = CategoryRepository::create(
        store,
        EquipmentCategory::builder()
            .name("CNC Machines")
            .responsible_team_id(team.id)
            .build()
            .unwrap(),
    )
    .await
    .unwrap();
    let equipment = Equipment::builder()
        .name("CNC Machine #1")
        .serial_number("CNC-001")
        .category_id(category.id)
        .department_id(department.id)
        .maintenance_team_id(Some(team.id))
        .build()
        .unwrap();
    EquipmentRepository::create(store, equipment).await.unwrap()
}
