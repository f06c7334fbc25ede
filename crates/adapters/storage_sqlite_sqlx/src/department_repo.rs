//! `SQLite` implementation of [`DepartmentRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::DepartmentRepository;
use gearguard_domain::department::{Department, NewDepartment};
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::DepartmentId;

use crate::error::StorageError;
use crate::row::names_by_id;

/// Wrapper for converting database rows into domain [`Department`].
struct Wrapper(Department);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Department {
            id: DepartmentId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            code: row.try_get("code")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO departments (name, code) VALUES (?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM departments WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM departments ORDER BY name, id";

/// `SQLite`-backed department repository.
#[derive(Clone)]
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository {
    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<Department, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&department.name)
                .bind(&department.code)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, GearGuardError>> + Send {
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

    fn names(
        &self,
        ids: &[DepartmentId],
    ) -> impl Future<Output = Result<HashMap<DepartmentId, String>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        async move {
            let rows = names_by_id(&pool, "departments", ids)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(id, name)| (DepartmentId::new(id), name))
                .collect())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Department>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
