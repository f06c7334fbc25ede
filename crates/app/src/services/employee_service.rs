//! Employee service: read access to the employee directory.

use gearguard_domain::employee::{Employee, EmployeeFilter};
use gearguard_domain::error::{GearGuardError, NotFoundError};
use gearguard_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

/// Application service for employees.
///
/// Accounts are created through [`AuthService`](super::auth_service::AuthService).
pub struct EmployeeService<E> {
    repo: E,
}

impl<E: EmployeeRepository> EmployeeService<E> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: E) -> Self {
        Self { repo }
    }

    /// Look up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no employee with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, GearGuardError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Employee",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List employees by name, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(
        &self,
        filter: EmployeeFilter,
    ) -> Result<Vec<Employee>, GearGuardError> {
        self.repo.get_all(filter).await
    }
}
