//! `SQLite` implementation of [`CategoryRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::CategoryRepository;
use gearguard_domain::category::{EquipmentCategory, NewCategory};
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::{CategoryId, TeamId};

use crate::error::StorageError;
use crate::row::names_by_id;

struct Wrapper(EquipmentCategory);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(EquipmentCategory {
            id: CategoryId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            responsible_team_id: TeamId::new(row.try_get("responsible_team_id")?),
            company_name: row.try_get("company_name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO equipment_categories (name, responsible_team_id, company_name) VALUES (?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM equipment_categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM equipment_categories ORDER BY name, id";

/// `SQLite`-backed equipment category repository.
#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<EquipmentCategory, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&category.name)
                .bind(category.responsible_team_id.get())
                .bind(&category.company_name)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<EquipmentCategory>, GearGuardError>> + Send {
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
        ids: &[CategoryId],
    ) -> impl Future<Output = Result<HashMap<CategoryId, String>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        async move {
            let rows = names_by_id(&pool, "equipment_categories", ids)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(id, name)| (CategoryId::new(id), name))
                .collect())
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<EquipmentCategory>, GearGuardError>> + Send {
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
