//! # gearguard-adapter-demo
//!
//! Seeds a small demo plant into an empty store so the API has something to
//! show straight after the first start.
//!
//! ## Provided records
//!
//! | Kind | Count | Notes |
//! |------|-------|-------|
//! | Maintenance teams | 3 | Mechanics, Electricians, IT Support |
//! | Departments | 3 | Production, Quality Assurance, IT Department |
//! | Employees | 4 | All log in with [`DEMO_PASSWORD`] |
//! | Equipment categories | 4 | Owned by Acme Industries |
//! | Work centers | 2 | Assembly Line 1, Paint Shop |
//! | Equipment | 5 | Lathe, press, HVAC unit, server rack, CNC machine |
//! | Maintenance requests | 6 | Mixed states, scheduled around today |
//!
//! ## Dependency rule
//!
//! Depends on `gearguard-app` (services and port traits) and
//! `gearguard-domain` only.

mod dataset;

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use gearguard_app::ports::{EmployeeRepository, EquipmentRepository, Storage};
use gearguard_app::services::category_service::CategoryService;
use gearguard_app::services::department_service::DepartmentService;
use gearguard_app::services::equipment_service::EquipmentService;
use gearguard_app::services::request_service::RequestService;
use gearguard_app::services::team_service::TeamService;
use gearguard_app::services::work_center_service::WorkCenterService;
use gearguard_domain::category::EquipmentCategory;
use gearguard_domain::department::Department;
use gearguard_domain::employee::{Employee, EmployeeFilter};
use gearguard_domain::equipment::{Equipment, EquipmentFilter};
use gearguard_domain::error::{GearGuardError, NotFoundError};
use gearguard_domain::password::PasswordHash;
use gearguard_domain::request::RequestDraft;
use gearguard_domain::team::MaintenanceTeam;
use gearguard_domain::time::{Timestamp, now};
use gearguard_domain::work_center::WorkCenter;

pub use dataset::DEMO_PASSWORD;

/// What a call to [`seed`] did.
///
/// Seeding is not transactional. A run that fails part-way keeps the records
/// it wrote, and every later run reports [`SeedOutcome::Skipped`]; reset the
/// database to seed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held data; nothing was written.
    Skipped,
    /// The demo dataset was written.
    Seeded { equipment: usize, requests: usize },
}

/// Write the demo dataset into a store with no teams, employees or equipment.
///
/// # Errors
///
/// Returns the first error raised while creating a record. Records written
/// before the failure are kept.
pub async fn seed<S: Storage>(storage: &S) -> Result<SeedOutcome, GearGuardError> {
    let teams = TeamService::new(storage.teams(), storage.employees());
    let has_teams = !teams.list_teams().await?.is_empty();
    let has_employees = !storage
        .employees()
        .get_all(EmployeeFilter::default())
        .await?
        .is_empty();
    let has_equipment = !storage
        .equipment()
        .get_all(EquipmentFilter::default())
        .await?
        .is_empty();
    if has_teams || has_employees || has_equipment {
        tracing::debug!(
            has_teams,
            has_employees,
            has_equipment,
            "store not empty, skipping demo seed"
        );
        return Ok(SeedOutcome::Skipped);
    }

    let mut team_ids = HashMap::new();
    for row in dataset::TEAMS {
        let team = MaintenanceTeam::builder()
            .name(row.name)
            .description(row.description)
            .members_count(row.members_count)
            .build()?;
        team_ids.insert(row.name, teams.create_team(team).await?.id);
    }

    let departments = DepartmentService::new(storage.departments());
    let mut department_ids = HashMap::new();
    for row in dataset::DEPARTMENTS {
        let department = Department::builder().name(row.name).code(row.code).build()?;
        department_ids.insert(row.name, departments.create_department(department).await?.id);
    }

    let employees = storage.employees();
    let password = PasswordHash::create(DEMO_PASSWORD);
    let mut employee_ids = HashMap::new();
    for row in dataset::EMPLOYEES {
        let employee = Employee::builder()
            .name(row.name)
            .email(row.email)
            .password_hash(password.clone())
            .department_id(lookup(&department_ids, row.department, "Department")?)
            .role(row.role)
            .default_team_id(lookup(&team_ids, row.team, "MaintenanceTeam")?)
            .build()?;
        employee_ids.insert(row.email, employees.create(employee).await?.id);
    }

    let categories = CategoryService::new(
        storage.categories(),
        storage.teams(),
        storage.equipment(),
    );
    let mut category_ids = HashMap::new();
    for row in dataset::CATEGORIES {
        let category = EquipmentCategory::builder()
            .name(row.name)
            .responsible_team_id(lookup(&team_ids, row.team, "MaintenanceTeam")?)
            .company_name(dataset::COMPANY)
            .build()?;
        category_ids.insert(row.name, categories.create_category(category).await?.id);
    }

    let work_centers = WorkCenterService::new(storage.work_centers());
    let mut work_center_ids = HashMap::new();
    for row in dataset::WORK_CENTERS {
        let work_center = WorkCenter::builder()
            .code(row.code)
            .name(row.name)
            .cost_per_hour(row.cost_per_hour)
            .capacity_per_day(row.capacity_per_day)
            .build()?;
        work_center_ids.insert(
            row.code,
            work_centers.create_work_center(work_center).await?.id,
        );
    }

    let equipment = EquipmentService::new(
        storage.equipment(),
        storage.categories(),
        storage.requests(),
        storage.departments(),
        storage.teams(),
        storage.employees(),
        storage.work_centers(),
    );
    let mut equipment_ids = HashMap::new();
    for row in dataset::EQUIPMENT {
        let work_center_id = row
            .work_center
            .map(|code| lookup(&work_center_ids, code, "WorkCenter"))
            .transpose()?;
        let new_equipment = Equipment::builder()
            .name(row.name)
            .serial_number(row.serial_number)
            .category_id(lookup(&category_ids, row.category, "EquipmentCategory")?)
            .department_id(lookup(&department_ids, row.department, "Department")?)
            .employee_id(Some(lookup(&employee_ids, row.owner, "Employee")?))
            .location(Some(row.location.to_string()))
            .purchase_date(calendar_date(row.purchased))
            .warranty_end(calendar_date(row.warranty_end))
            .work_center_id(work_center_id)
            .default_technician_id(Some(lookup(&employee_ids, row.technician, "Employee")?))
            .build()?;
        equipment_ids.insert(
            row.serial_number,
            equipment.create_equipment(new_equipment).await?.equipment.id,
        );
    }

    let requests = RequestService::new(
        storage.requests(),
        storage.equipment(),
        storage.teams(),
        storage.employees(),
    );
    let today = now();
    for row in dataset::REQUESTS {
        let draft = RequestDraft {
            request_type: row.request_type,
            subject: row.subject.to_string(),
            description: Some(row.description.to_string()),
            equipment_id: lookup(&equipment_ids, row.equipment, "Equipment")?,
            assigned_technician_id: Some(lookup(&employee_ids, row.technician, "Employee")?),
            scheduled_date: Some(today + Duration::days(row.scheduled_in_days)),
            start_datetime: None,
            duration_hours: None,
            state: Some(row.state),
        };
        requests.create_request(draft).await?;
    }

    tracing::info!(
        teams = dataset::TEAMS.len(),
        employees = dataset::EMPLOYEES.len(),
        equipment = dataset::EQUIPMENT.len(),
        requests = dataset::REQUESTS.len(),
        "demo data seeded"
    );
    Ok(SeedOutcome::Seeded {
        equipment: dataset::EQUIPMENT.len(),
        requests: dataset::REQUESTS.len(),
    })
}

fn lookup<T: Copy>(
    ids: &HashMap<&'static str, T>,
    key: &'static str,
    entity: &'static str,
) -> Result<T, GearGuardError> {
    ids.get(key).copied().ok_or_else(|| {
        NotFoundError {
            entity,
            id: key.to_string(),
        }
        .into()
    })
}

/// Midnight UTC on the given day; `None` for an impossible date.
fn calendar_date((year, month, day): (i32, u32, u32)) -> Option<Timestamp> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
