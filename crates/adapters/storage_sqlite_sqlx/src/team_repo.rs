//! `SQLite` implementation of [`TeamRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::TeamRepository;
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::TeamId;
use gearguard_domain::team::{MaintenanceTeam, NewTeam};

use crate::error::StorageError;
use crate::row::names_by_id;

struct Wrapper(MaintenanceTeam);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(MaintenanceTeam {
            id: TeamId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            members_count: row.try_get("members_count")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO maintenance_teams (name, description, members_count) VALUES (?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM maintenance_teams WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM maintenance_teams ORDER BY name, id";

/// `SQLite`-backed maintenance team repository.
#[derive(Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TeamRepository for SqliteTeamRepository {
    fn create(
        &self,
        team: NewTeam,
    ) -> impl Future<Output = Result<MaintenanceTeam, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&team.name)
                .bind(&team.description)
                .bind(team.members_count)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: TeamId,
    ) -> impl Future<Output = Result<Option<MaintenanceTeam>, GearGuardError>> + Send {
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
        ids: &[TeamId],
    ) -> impl Future<Output = Result<HashMap<TeamId, String>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        async move {
            let rows = names_by_id(&pool, "maintenance_teams", ids)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(id, name)| (TeamId::new(id), name))
                .collect())
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<MaintenanceTeam>, GearGuardError>> + Send {
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
