//! Department service: use-cases for managing departments.

use gearguard_domain::department::{Department, NewDepartment};
use gearguard_domain::error::GearGuardError;

use crate::ports::DepartmentRepository;

/// Application service for departments.
pub struct DepartmentService<D> {
    repo: D,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: D) -> Self {
        Self { repo }
    }

    /// Create a department after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<Department, GearGuardError> {
        department.validate()?;
        self.repo.create(department).await
    }

    /// List all departments by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_departments(&self) -> Result<Vec<Department>, GearGuardError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use gearguard_domain::error::ValidationError;

    fn make_service() -> DepartmentService<InMemoryStore> {
        DepartmentService::new(InMemoryStore::default())
    }

    #[tokio::test]
    async fn should_list_departments_by_name() {
        let svc = make_service();
        for name in ["Production", "Admin", "IT"] {
            svc.create_department(Department::builder().name(name).build().unwrap())
                .await
                .unwrap();
        }

        let names: Vec<_> = svc
            .list_departments()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["Admin", "IT", "Production"]);
    }

    #[tokio::test]
    async fn should_return_error_when_creating_with_empty_name() {
        let svc = make_service();
        let draft = NewDepartment {
            name: "  ".to_string(),
            code: None,
        };

        let err = svc.create_department(draft).await.unwrap_err();
        assert!(matches!(
            err,
            GearGuardError::Validation(ValidationError::EmptyName)
        ));
    }
}
