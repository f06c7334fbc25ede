//! Shared application state for axum handlers.

use std::sync::Arc;

use gearguard_app::ports::Storage;
use gearguard_app::services::auth_service::AuthService;
use gearguard_app::services::category_service::CategoryService;
use gearguard_app::services::department_service::DepartmentService;
use gearguard_app::services::employee_service::EmployeeService;
use gearguard_app::services::equipment_service::EquipmentService;
use gearguard_app::services::request_service::RequestService;
use gearguard_app::services::team_service::TeamService;
use gearguard_app::services::work_center_service::WorkCenterService;

use crate::session::CookieSettings;

/// Application state shared across all axum handlers.
///
/// Generic over the [`Storage`] bundle to avoid dynamic dispatch.
/// `Clone` is implemented manually so the storage types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S: Storage> {
    pub auth_service: Arc<AuthService<S::Employees, S::Departments>>,
    pub department_service: Arc<DepartmentService<S::Departments>>,
    pub team_service: Arc<TeamService<S::Teams, S::Employees>>,
    pub employee_service: Arc<EmployeeService<S::Employees>>,
    pub category_service: Arc<CategoryService<S::Categories, S::Teams, S::Equipment>>,
    pub equipment_service: Arc<
        EquipmentService<
            S::Equipment,
            S::Categories,
            S::Requests,
            S::Departments,
            S::Teams,
            S::Employees,
            S::WorkCenters,
        >,
    >,
    pub request_service:
        Arc<RequestService<S::Requests, S::Equipment, S::Teams, S::Employees>>,
    pub work_center_service: Arc<WorkCenterService<S::WorkCenters>>,
    /// Attributes of the session cookie.
    pub cookies: CookieSettings,
}

impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            department_service: Arc::clone(&self.department_service),
            team_service: Arc::clone(&self.team_service),
            employee_service: Arc::clone(&self.employee_service),
            category_service: Arc::clone(&self.category_service),
            equipment_service: Arc::clone(&self.equipment_service),
            request_service: Arc::clone(&self.request_service),
            work_center_service: Arc::clone(&self.work_center_service),
            cookies: self.cookies,
        }
    }
}

impl<S: Storage> AppState<S> {
    /// Wire every service onto the repositories of `storage`.
    pub fn new(storage: &S, cookies: CookieSettings) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                storage.employees(),
                storage.departments(),
            )),
            department_service: Arc::new(DepartmentService::new(storage.departments())),
            team_service: Arc::new(TeamService::new(storage.teams(), storage.employees())),
            employee_service: Arc::new(EmployeeService::new(storage.employees())),
            category_service: Arc::new(CategoryService::new(
                storage.categories(),
                storage.teams(),
                storage.equipment(),
            )),
            equipment_service: Arc::new(EquipmentService::new(
                storage.equipment(),
                storage.categories(),
                storage.requests(),
                storage.departments(),
                storage.teams(),
                storage.employees(),
                storage.work_centers(),
            )),
            request_service: Arc::new(RequestService::new(
                storage.requests(),
                storage.equipment(),
                storage.teams(),
                storage.employees(),
            )),
            work_center_service: Arc::new(WorkCenterService::new(storage.work_centers())),
            cookies,
        }
    }
}
