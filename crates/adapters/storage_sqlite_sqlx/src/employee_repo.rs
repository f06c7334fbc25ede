//! `SQLite` implementation of [`EmployeeRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::EmployeeRepository;
use gearguard_domain::employee::{Employee, EmployeeFilter, NewEmployee};
use gearguard_domain::error::{GearGuardError, ValidationError};
use gearguard_domain::id::{DepartmentId, EmployeeId, TeamId};
use gearguard_domain::password::PasswordHash;
use gearguard_domain::time::now;

use crate::error::{StorageError, is_unique_violation};
use crate::row::{names_by_id, parse};

/// Wrapper for converting database rows into domain [`Employee`].
struct Wrapper(Employee);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let role: String = row.try_get("role")?;
        let default_team_id: Option<i64> = row.try_get("default_team_id")?;

        Ok(Self(Employee {
            id: EmployeeId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            department_id: DepartmentId::new(row.try_get("department_id")?),
            role: parse(&role)?,
            default_team_id: default_team_id.map(TeamId::new),
            created_at: row.try_get("created_at")?,
        }))
    }
}

/// An employee row together with its password hash.
struct Credentials(Employee, PasswordHash);

impl<'r> FromRow<'r, SqliteRow> for Credentials {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(employee) = Wrapper::from_row(row)?;
        let hash: String = row.try_get("password_hash")?;
        Ok(Self(employee, PasswordHash::from_encoded(hash)))
    }
}

const INSERT: &str = "INSERT INTO employees (name, email, password_hash, department_id, role, default_team_id, created_at) \
VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM employees WHERE id = ?";
const SELECT_BY_EMAIL: &str = "SELECT * FROM employees WHERE email = ?";
const SELECT_FILTERED: &str = "SELECT * FROM employees \
WHERE (? IS NULL OR role = ?) AND (? IS NULL OR default_team_id = ?) \
ORDER BY name, id";

/// `SQLite`-backed employee repository.
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query_as::<_, Wrapper>(INSERT)
                .bind(&employee.name)
                .bind(&employee.email)
                .bind(employee.password_hash.as_str())
                .bind(employee.department_id.get())
                .bind(employee.role.as_str())
                .bind(employee.default_team_id.map(TeamId::get))
                .bind(now())
                .fetch_one(&pool)
                .await;

            match result {
                Ok(row) => Ok(row.0),
                Err(err) if is_unique_violation(&err) => Err(ValidationError::EmailTaken.into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, GearGuardError>> + Send {
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
        ids: &[EmployeeId],
    ) -> impl Future<Output = Result<HashMap<EmployeeId, String>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        async move {
            let rows = names_by_id(&pool, "employees", ids)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(id, name)| (EmployeeId::new(id), name))
                .collect())
        }
    }

    fn find_credentials(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<(Employee, PasswordHash)>, GearGuardError>> + Send
    {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Credentials> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|Credentials(employee, hash)| (employee, hash)))
        }
    }

    fn get_all(
        &self,
        filter: EmployeeFilter,
    ) -> impl Future<Output = Result<Vec<Employee>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let role = filter.role.map(|role| role.as_str());
            let team = filter.team_id.map(TeamId::get);
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_FILTERED)
                .bind(role)
                .bind(role)
                .bind(team)
                .bind(team)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
