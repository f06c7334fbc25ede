//! `SQLite` implementation of [`EquipmentRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearguard_app::ports::EquipmentRepository;
use gearguard_domain::equipment::{Equipment, EquipmentFilter, NewEquipment};
use gearguard_domain::error::{GearGuardError, ValidationError};
use gearguard_domain::id::{
    CategoryId, DepartmentId, EmployeeId, EquipmentId, TeamId, WorkCenterId,
};
use gearguard_domain::time::now;

use crate::error::StorageError;
use crate::row::{names_by_id, parse};

/// Wrapper for converting database rows into domain [`Equipment`].
struct Wrapper(Equipment);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let state: String = row.try_get("state")?;
        let employee_id: Option<i64> = row.try_get("employee_id")?;
        let work_center_id: Option<i64> = row.try_get("work_center_id")?;
        let default_technician_id: Option<i64> = row.try_get("default_technician_id")?;

        Ok(Self(Equipment {
            id: EquipmentId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            serial_number: row.try_get("serial_number")?,
            category_id: CategoryId::new(row.try_get("category_id")?),
            department_id: DepartmentId::new(row.try_get("department_id")?),
            employee_id: employee_id.map(EmployeeId::new),
            location: row.try_get("location")?,
            purchase_date: row.try_get("purchase_date")?,
            warranty_end: row.try_get("warranty_end")?,
            work_center_id: work_center_id.map(WorkCenterId::new),
            maintenance_team_id: TeamId::new(row.try_get("maintenance_team_id")?),
            default_technician_id: default_technician_id.map(EmployeeId::new),
            state: parse(&state)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO equipment \
(name, serial_number, category_id, department_id, employee_id, location, purchase_date, warranty_end, \
work_center_id, maintenance_team_id, default_technician_id, state, created_at, updated_at) \
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM equipment WHERE id = ?";
const SELECT_FILTERED: &str = "SELECT * FROM equipment \
WHERE (? IS NULL OR department_id = ?) AND (? IS NULL OR employee_id = ?) AND (? IS NULL OR state = ?) \
ORDER BY id DESC";
const UPDATE: &str = "UPDATE equipment SET \
name = ?, serial_number = ?, category_id = ?, department_id = ?, employee_id = ?, location = ?, \
purchase_date = ?, warranty_end = ?, work_center_id = ?, maintenance_team_id = ?, \
default_technician_id = ?, state = ?, updated_at = ? \
WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM equipment WHERE id = ?";

/// `SQLite`-backed equipment repository.
#[derive(Clone)]
pub struct SqliteEquipmentRepository {
    pool: SqlitePool,
}

impl SqliteEquipmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EquipmentRepository for SqliteEquipmentRepository {
    fn create(
        &self,
        equipment: NewEquipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let team = equipment
                .maintenance_team_id
                .ok_or(ValidationError::MissingField("maintenanceTeamId"))?;
            let at = now();
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&equipment.name)
                .bind(&equipment.serial_number)
                .bind(equipment.category_id.get())
                .bind(equipment.department_id.get())
                .bind(equipment.employee_id.map(EmployeeId::get))
                .bind(&equipment.location)
                .bind(equipment.purchase_date)
                .bind(equipment.warranty_end)
                .bind(equipment.work_center_id.map(WorkCenterId::get))
                .bind(team.get())
                .bind(equipment.default_technician_id.map(EmployeeId::get))
                .bind(equipment.state.as_str())
                .bind(at)
                .bind(at)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, GearGuardError>> + Send {
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
        ids: &[EquipmentId],
    ) -> impl Future<Output = Result<HashMap<EquipmentId, String>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        async move {
            let rows = names_by_id(&pool, "equipment", ids)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(id, name)| (EquipmentId::new(id), name))
                .collect())
        }
    }

    fn get_all(
        &self,
        filter: EquipmentFilter,
    ) -> impl Future<Output = Result<Vec<Equipment>, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let department = filter.department_id.map(DepartmentId::get);
            let employee = filter.employee_id.map(EmployeeId::get);
            let state = filter.state.map(|state| state.as_str());
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_FILTERED)
                .bind(department)
                .bind(department)
                .bind(employee)
                .bind(employee)
                .bind(state)
                .bind(state)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(UPDATE)
                .bind(&equipment.name)
                .bind(&equipment.serial_number)
                .bind(equipment.category_id.get())
                .bind(equipment.department_id.get())
                .bind(equipment.employee_id.map(EmployeeId::get))
                .bind(&equipment.location)
                .bind(equipment.purchase_date)
                .bind(equipment.warranty_end)
                .bind(equipment.work_center_id.map(WorkCenterId::get))
                .bind(equipment.maintenance_team_id.get())
                .bind(equipment.default_technician_id.map(EmployeeId::get))
                .bind(equipment.state.as_str())
                .bind(equipment.updated_at)
                .bind(equipment.id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn delete(&self, id: EquipmentId) -> impl Future<Output = Result<(), GearGuardError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Requests go with it through ON DELETE CASCADE.
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
