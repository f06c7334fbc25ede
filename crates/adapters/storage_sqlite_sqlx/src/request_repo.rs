//! `SQLite` implementation of [`RequestRepository`].
//!
//! Numbering and the Scrap cascade each run inside a single transaction.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use gearguard_app::ports::RequestRepository;
use gearguard_domain::equipment::EquipmentState;
use gearguard_domain::error::GearGuardError;
use gearguard_domain::id::{
    CategoryId, DepartmentId, EmployeeId, EquipmentId, RequestId, TeamId,
};
use gearguard_domain::request::{
    MaintenanceRequest, NewMaintenanceRequest, RequestFilter, RequestNumber, RequestState,
};
use gearguard_domain::time::{Timestamp, now};

use crate::error::StorageError;
use crate::row::parse;

/// Wrapper for converting database rows into domain [`MaintenanceRequest`].
struct Wrapper(MaintenanceRequest);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let request_number: String = row.try_get("request_number")?;
        let request_type: String = row.try_get("request_type")?;
        let state: String = row.try_get("state")?;
        let employee_id: Option<i64> = row.try_get("employee_id")?;
        let technician_id: Option<i64> = row.try_get("assigned_technician_id")?;

        Ok(Self(MaintenanceRequest {
            id: RequestId::new(row.try_get("id")?),
            request_number: parse(&request_number)?,
            request_type: parse(&request_type)?,
            subject: row.try_get("subject")?,
            description: row.try_get("description")?,
            equipment_id: EquipmentId::new(row.try_get("equipment_id")?),
            equipment_category_id: CategoryId::new(row.try_get("equipment_category_id")?),
            department_id: DepartmentId::new(row.try_get("department_id")?),
            employee_id: employee_id.map(EmployeeId::new),
            maintenance_team_id: TeamId::new(row.try_get("maintenance_team_id")?),
            assigned_technician_id: technician_id.map(EmployeeId::new),
            scheduled_date: row.try_get("scheduled_date")?,
            start_datetime: row.try_get("start_datetime")?,
            duration_hours: row.try_get("duration_hours")?,
            state: parse(&state)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO maintenance_requests \
(request_number, request_type, subject, description, equipment_id, equipment_category_id, department_id, \
employee_id, maintenance_team_id, assigned_technician_id, scheduled_date, start_datetime, duration_hours, \
state, created_at, updated_at) \
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *";
const SELECT_NUMBERS_FOR_YEAR: &str =
    "SELECT request_number FROM maintenance_requests WHERE request_number LIKE ?";
const SELECT_BY_ID: &str = "SELECT * FROM maintenance_requests WHERE id = ?";
// AUTOINCREMENT ids follow insertion order.
const SELECT_FILTERED: &str = "SELECT * FROM maintenance_requests \
WHERE (? IS NULL OR state = ?) AND (? IS NULL OR maintenance_team_id = ?) AND (? IS NULL OR request_type = ?) \
ORDER BY id DESC";
const UPDATE_STATE: &str =
    "UPDATE maintenance_requests SET state = ?, updated_at = ? WHERE id = ? RETURNING *";
const UPDATE_EQUIPMENT_STATE: &str = "UPDATE equipment SET state = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM maintenance_requests WHERE id = ?";
const COUNT_OPEN_FOR_EQUIPMENT: &str =
    "SELECT COUNT(*) FROM maintenance_requests WHERE equipment_id = ? AND state IN (?, ?)";

/// `SQLite`-backed maintenance request repository.
#[derive(Clone)]
pub struct SqliteRequestRepository {
    pool: SqlitePool,
}

impl SqliteRequestRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Allocate the next number for `year` and insert under it.
///
/// Must run inside a write transaction.
async fn insert_numbered(
    conn: &mut SqliteConnection,
    request: &NewMaintenanceRequest,
    year: i32,
) -> Result<Wrapper, sqlx::Error> {
    let issued: Vec<(String,)> = sqlx::query_as(SELECT_NUMBERS_FOR_YEAR)
        .bind(format!("{}%", RequestNumber::year_prefix(year)))
        .fetch_all(&mut *conn)
        .await?;
    let last = issued
        .iter()
        .filter_map(|(number,)| number.parse::<RequestNumber>().ok())
        .filter(|number| number.year() == year)
        .max();
    let number = RequestNumber::next(year, last);
    let at = now();

    sqlx::query_as(INSERT)
        .bind(number.to_string())
        .bind(request.request_type.as_str())
        .bind(&request.subject)
        .bind(&request.description)
        .bind(request.equipment_id.get())
        .bind(request.equipment_category_id.get())
        .bind(request.department_id.get())
        .bind(request.employee_id.map(EmployeeId::get))
        .bind(request.maintenance_team_id.get())
        .bind(request.assigned_technician_id.map(EmployeeId::get))
        .bind(request.scheduled_date)
        .bind(request.start_datetime)
        .bind(request.duration_hours)
        .bind(request.state.as_str())
        .bind(at)
        .bind(at)
        .fetch_one(&mut *conn)
        .await
}

impl RequestRepository for SqliteRequestRepository {
    fn create(
        &self,
        request: NewMaintenanceRequest,
        year: i32,
    ) -> impl Future<Output = Result<MaintenanceRequest, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            // IMMEDIATE takes the write lock before the numbers are read. Dropping
            // the guard before commit rolls back and releases the lock.
            let mut tx = pool
                .begin_with("BEGIN IMMEDIATE")
                .await
                .map_err(StorageError::from)?;
            let row = insert_numbered(&mut *tx, &request, year)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;
            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: RequestId,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send {
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

    fn get_all(
        &self,
        filter: RequestFilter,
    ) -> impl Future<Output = Result<Vec<MaintenanceRequest>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let state = filter.state.map(RequestState::as_str);
            let team = filter.team_id.map(TeamId::get);
            let kind = filter.request_type.map(|kind| kind.as_str());
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_FILTERED)
                .bind(state)
                .bind(state)
                .bind(team)
                .bind(team)
                .bind(kind)
                .bind(kind)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update_state(
        &self,
        id: RequestId,
        state: RequestState,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<MaintenanceRequest>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(UPDATE_STATE)
                .bind(state.as_str())
                .bind(at)
                .bind(id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(request)) = row else {
                return Ok(None);
            };

            if state.scraps_equipment() {
                sqlx::query(UPDATE_EQUIPMENT_STATE)
                    .bind(EquipmentState::Scrap.as_str())
                    .bind(at)
                    .bind(request.equipment_id.get())
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some(request))
        }
    }

    fn delete(&self, id: RequestId) -> impl Future<Output = Result<(), GearGuardError>> + Send {
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

    fn count_open_for_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<usize, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (count,): (i64,) = sqlx::query_as(COUNT_OPEN_FOR_EQUIPMENT)
                .bind(equipment_id.get())
                .bind(RequestState::New.as_str())
                .bind(RequestState::InProgress.as_str())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(usize::try_from(count).unwrap_or_default())
        }
    }
}
