//! `SQLite` implementation of [`WorkCenterRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::WorkCenterRepository;
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::WorkCenterId;
use gearguard_domain::work_center::{NewWorkCenter, WorkCenter};

use crate::error::StorageError;

struct Wrapper(WorkCenter);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(WorkCenter {
            id: WorkCenterId::new(row.try_get("id")?),
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            tag: row.try_get("tag")?,
            alternative_workcenters: row.try_get("alternative_workcenters")?,
            cost_per_hour: row.try_get("cost_per_hour")?,
            capacity_time_efficiency: row.try_get("capacity_time_efficiency")?,
            oee_target: row.try_get("oee_target")?,
            capacity_per_day: row.try_get("capacity_per_day")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO work_centers \
(code, name, tag, alternative_workcenters, cost_per_hour, capacity_time_efficiency, oee_target, capacity_per_day) \
VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM work_centers WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM work_centers ORDER BY code, id";
const DELETE_BY_ID: &str = "DELETE FROM work_centers WHERE id = ?";

/// `SQLite`-backed work center repository.
#[derive(Clone)]
pub struct SqliteWorkCenterRepository {
    pool: SqlitePool,
}

impl SqliteWorkCenterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl WorkCenterRepository for SqliteWorkCenterRepository {
    fn create(
        &self,
        work_center: NewWorkCenter,
    ) -> impl Future<Output = Result<WorkCenter, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&work_center.code)
                .bind(&work_center.name)
                .bind(&work_center.tag)
                .bind(&work_center.alternative_workcenters)
                .bind(work_center.cost_per_hour)
                .bind(work_center.capacity_time_efficiency)
                .bind(work_center.oee_target)
                .bind(work_center.capacity_per_day)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: WorkCenterId,
    ) -> impl Future<Output = Result<Option<WorkCenter>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkCenter>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: WorkCenterId,
    ) -> impl Future<Output = Result<(), GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
