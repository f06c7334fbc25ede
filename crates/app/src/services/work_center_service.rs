//! Work center service: use-cases for production work centers.

use gearguard_domain::error::{GearGuardError, NotFoundError};
use gearguard_domain::id::WorkCenterId;
use gearguard_domain::work_center::{NewWorkCenter, WorkCenter};

use crate::ports::WorkCenterRepository;

/// Application service for work center CRUD operations.
pub struct WorkCenterService<W> {
    repo: W,
}

impl<W: WorkCenterRepository> WorkCenterService<W> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: W) -> Self {
        Self { repo }
    }

    /// Create a work center after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_work_center(
        &self,
        work_center: NewWorkCenter,
    ) -> Result<WorkCenter, GearGuardError> {
        work_center.validate()?;
        self.repo.create(work_center).await
    }

    /// Look up a work center by id.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no work center with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_work_center(&self, id: WorkCenterId) -> Result<WorkCenter, GearGuardError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Work center",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List work centers by code.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_work_centers(&self) -> Result<Vec<WorkCenter>, GearGuardError> {
        self.repo.get_all().await
    }

    /// Delete a work center.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no work center with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_work_center(&self, id: WorkCenterId) -> Result<(), GearGuardError> {
        self.get_work_center(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use gearguard_domain::error::ValidationError;

    fn make_service() -> WorkCenterService<InMemoryStore> {
        WorkCenterService::new(InMemoryStore::default())
    }

    fn assembly_line() -> NewWorkCenter {
        WorkCenter::builder()
            .code("WC-001")
            .name("Assembly Line 1")
            .tag("Production")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_work_center_with_defaults() {
        let svc = make_service();
        let created = svc.create_work_center(assembly_line()).await.unwrap();

        let fetched = svc.get_work_center(created.id).await.unwrap();
        assert_eq!(fetched.code, "WC-001");
        assert!((fetched.oee_target - 85.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_list_work_centers_by_code() {
        let svc = make_service();
        svc.create_work_center(
            WorkCenter::builder()
                .code("WC-002")
                .name("Packaging")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
        svc.create_work_center(assembly_line()).await.unwrap();

        let codes: Vec<_> = svc
            .list_work_centers()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.code)
            .collect();
        assert_eq!(codes, ["WC-001", "WC-002"]);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_oee_target() {
        let svc = make_service();
        let mut draft = assembly_line();
        draft.oee_target = 120.0;

        let err = svc.create_work_center(draft).await.unwrap_err();
        assert!(matches!(
            err,
            GearGuardError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn should_delete_work_center() {
        let svc = make_service();
        let created = svc.create_work_center(assembly_line()).await.unwrap();

        svc.delete_work_center(created.id).await.unwrap();
        assert!(svc.list_work_centers().await.unwrap().is_empty());

        let err = svc.delete_work_center(created.id).await.unwrap_err();
        assert!(matches!(err, GearGuardError::NotFound(_)));
    }
}
