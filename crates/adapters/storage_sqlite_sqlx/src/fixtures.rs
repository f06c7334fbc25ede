//! Shared setup for repository tests.

use sqlx::SqlitePool;

use gearguard_app::ports::{
    CategoryRepository, DepartmentRepository, EquipmentRepository, TeamRepository,
};
use gearguard_domain::category::EquipmentCategory;
use gearguard_domain::department::Department;
use gearguard_domain::equipment::Equipment;
use gearguard_domain::team::MaintenanceTeam;

use crate::category_repo::SqliteCategoryRepository;
use crate::department_repo::SqliteDepartmentRepository;
use crate::equipment_repo::SqliteEquipmentRepository;
use crate::pool::Config;
use crate::team_repo::SqliteTeamRepository;

pub(crate) async fn memory_pool() -> SqlitePool {
    Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap()
    .pool()
    .clone()
}

/// A team, department and category, plus one piece of equipment using them.
pub(crate) async fn seed_equipment(pool: &SqlitePool) -> Equipment {
    let team = SqliteTeamRepository::new(pool.clone())
        .create(MaintenanceTeam::builder().name("Mechanics").build().unwrap())
        .await
        .unwrap();
    let department = SqliteDepartmentRepository::new(pool.clone())
        .create(Department::builder().name("Production").build().unwrap())
        .await
        .unwrap();
    let category = SqliteCategoryRepository::new(pool.clone())
        .create(
            EquipmentCategory::builder()
                .name("CNC Machines")
                .responsible_team_id(team.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    SqliteEquipmentRepository::new(pool.clone())
        .create(
            Equipment::builder()
                .name("CNC Machine #1")
                .serial_number("CNC-001")
                .category_id(category.id)
                .department_id(department.id)
                .maintenance_team_id(Some(team.id))
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
}
