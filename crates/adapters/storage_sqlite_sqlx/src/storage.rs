//! [`Storage`] bundle over one `SQLite` pool.

use sqlx::SqlitePool;

use gearguard_app::ports::Storage;

use crate::category_repo::SqliteCategoryRepository;
use crate::department_repo::SqliteDepartmentRepository;
use crate::employee_repo::SqliteEmployeeRepository;
use crate::equipment_repo::SqliteEquipmentRepository;
use crate::pool::Database;
use crate::request_repo::SqliteRequestRepository;
use crate::team_repo::SqliteTeamRepository;
use crate::work_center_repo::SqliteWorkCenterRepository;

/// Every repository, sharing one connection pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<&Database> for SqliteStorage {
    fn from(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }
}

impl Storage for SqliteStorage {
    type Departments = SqliteDepartmentRepository;
    type Teams = SqliteTeamRepository;
    type Employees = SqliteEmployeeRepository;
    type Categories = SqliteCategoryRepository;
    type Equipment = SqliteEquipmentRepository;
    type Requests = SqliteRequestRepository;
    type WorkCenters = SqliteWorkCenterRepository;

    fn departments(&self) -> Self::Departments {
        SqliteDepartmentRepository::new(self.pool.clone())
    }

    fn teams(&self) -> Self::Teams {
        SqliteTeamRepository::new(self.pool.clone())
    }

    fn employees(&self) -> Self::Employees {
        SqliteEmployeeRepository::new(self.pool.clone())
    }

    fn categories(&self) -> Self::Categories {
        SqliteCategoryRepository::new(self.pool.clone())
    }

    fn equipment(&self) -> Self::Equipment {
        SqliteEquipmentRepository::new(self.pool.clone())
    }

    fn requests(&self) -> Self::Requests {
        SqliteRequestRepository::new(self.pool.clone())
    }

    fn work_centers(&self) -> Self::WorkCenters {
        SqliteWorkCenterRepository::new(self.pool.clone())
    }
}
