//! The demo records, keyed by name so that later rows can refer to earlier ones.

use gearguard_domain::employee::Role;
use gearguard_domain::request::{RequestState, RequestType};

pub(crate) struct TeamRow {
    pub name: &'static str,
    pub description: &'static str,
    pub members_count: i64,
}

pub(crate) struct DepartmentRow {
    pub name: &'static str,
    pub code: &'static str,
}

pub(crate) struct EmployeeRow {
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub role: Role,
    pub team: &'static str,
}

pub(crate) struct CategoryRow {
    pub name: &'static str,
    pub team: &'static str,
}

pub(crate) struct WorkCenterRow {
    pub code: &'static str,
    pub name: &'static str,
    pub cost_per_hour: f64,
    pub capacity_per_day: i64,
}

pub(crate) struct EquipmentRow {
    pub name: &'static str,
    pub serial_number: &'static str,
    pub category: &'static str,
    pub department: &'static str,
    pub owner: &'static str,
    pub location: &'static str,
    /// `(year, month, day)`
    pub purchased: (i32, u32, u32),
    pub warranty_end: (i32, u32, u32),
    pub work_center: Option<&'static str>,
    pub technician: &'static str,
}

pub(crate) struct RequestRow {
    pub request_type: RequestType,
    pub subject: &'static str,
    pub description: &'static str,
    pub equipment: &'static str,
    pub technician: &'static str,
    /// Days from now; negative values land in the past (overdue).
    pub scheduled_in_days: i64,
    pub state: RequestState,
}

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

pub(crate) const COMPANY: &str = "Acme Industries";

pub(crate) const TEAMS: &[TeamRow] = &[
    TeamRow {
        name: "Mechanics",
        description: "Handles mechanical equipment maintenance and repairs",
        members_count: 5,
    },
    TeamRow {
        name: "Electricians",
        description: "Handles electrical systems and equipment",
        members_count: 4,
    },
    TeamRow {
        name: "IT Support",
        description: "Handles computer systems and IT equipment",
        members_count: 3,
    },
];

pub(crate) const DEPARTMENTS: &[DepartmentRow] = &[
    DepartmentRow {
        name: "Production",
        code: "PROD",
    },
    DepartmentRow {
        name: "Quality Assurance",
        code: "QA",
    },
    DepartmentRow {
        name: "IT Department",
        code: "IT",
    },
];

pub(crate) const EMPLOYEES: &[EmployeeRow] = &[
    EmployeeRow {
        name: "John Smith",
        email: "john@example.com",
        department: "Production",
        role: Role::Manager,
        team: "Mechanics",
    },
    EmployeeRow {
        name: "Sarah Johnson",
        email: "sarah@example.com",
        department: "Quality Assurance",
        role: Role::Technician,
        team: "Electricians",
    },
    EmployeeRow {
        name: "Mike Davis",
        email: "mike@example.com",
        department: "IT Department",
        role: Role::Technician,
        team: "IT Support",
    },
    EmployeeRow {
        name: "Emma Wilson",
        email: "emma@example.com",
        department: "Production",
        role: Role::User,
        team: "Mechanics",
    },
];

pub(crate) const CATEGORIES: &[CategoryRow] = &[
    CategoryRow {
        name: "Foundry Equipment",
        team: "Mechanics",
    },
    CategoryRow {
        name: "Press Shop",
        team: "Mechanics",
    },
    CategoryRow {
        name: "HVAC Systems",
        team: "Electricians",
    },
    CategoryRow {
        name: "Computer Systems",
        team: "IT Support",
    },
];

pub(crate) const WORK_CENTERS: &[WorkCenterRow] = &[
    WorkCenterRow {
        code: "AL-001",
        name: "Assembly Line 1",
        cost_per_hour: 150.0,
        capacity_per_day: 500,
    },
    WorkCenterRow {
        code: "PS-001",
        name: "Paint Shop",
        cost_per_hour: 120.0,
        capacity_per_day: 300,
    },
];

pub(crate) const EQUIPMENT: &[EquipmentRow] = &[
    EquipmentRow {
        name: "Industrial Lathe #12",
        serial_number: "LAT-2023-012",
        category: "Foundry Equipment",
        department: "Production",
        owner: "john@example.com",
        location: "Building A, Floor 2",
        purchased: (2023, 1, 15),
        warranty_end: (2026, 1, 15),
        work_center: Some("AL-001"),
        technician: "john@example.com",
    },
    EquipmentRow {
        name: "Hydraulic Press #5",
        serial_number: "HP-2022-005",
        category: "Press Shop",
        department: "Production",
        owner: "emma@example.com",
        location: "Building B, Floor 1",
        purchased: (2022, 6, 10),
        warranty_end: (2025, 6, 10),
        work_center: Some("AL-001"),
        technician: "john@example.com",
    },
    EquipmentRow {
        name: "HVAC Unit #3",
        serial_number: "HVAC-2021-003",
        category: "HVAC Systems",
        department: "Production",
        owner: "john@example.com",
        location: "Building A, Roof",
        purchased: (2021, 3, 20),
        warranty_end: (2024, 3, 20),
        work_center: None,
        technician: "sarah@example.com",
    },
    EquipmentRow {
        name: "Server Rack #7",
        serial_number: "SRV-2023-007",
        category: "Computer Systems",
        department: "IT Department",
        owner: "mike@example.com",
        location: "Data Center",
        purchased: (2023, 9, 1),
        warranty_end: (2028, 9, 1),
        work_center: None,
        technician: "mike@example.com",
    },
    EquipmentRow {
        name: "CNC Machine #8",
        serial_number: "CNC-2020-008",
        category: "Foundry Equipment",
        department: "Production",
        owner: "emma@example.com",
        location: "Building A, Floor 1",
        purchased: (2020, 11, 5),
        warranty_end: (2023, 11, 5),
        work_center: Some("PS-001"),
        technician: "john@example.com",
    },
];

pub(crate) const REQUESTS: &[RequestRow] = &[
    RequestRow {
        request_type: RequestType::Corrective,
        subject: "Strange noise from bearings",
        description: "Unusual grinding noise coming from the main bearing assembly",
        equipment: "LAT-2023-012",
        technician: "john@example.com",
        scheduled_in_days: -5,
        state: RequestState::New,
    },
    RequestRow {
        request_type: RequestType::Corrective,
        subject: "Hydraulic fluid leak",
        description: "Small hydraulic fluid leak detected near cylinder #2",
        equipment: "HP-2022-005",
        technician: "john@example.com",
        scheduled_in_days: 1,
        state: RequestState::InProgress,
    },
    RequestRow {
        request_type: RequestType::Preventive,
        subject: "Quarterly HVAC filter replacement",
        description: "Regular quarterly maintenance - filter replacement and system check",
        equipment: "HVAC-2021-003",
        technician: "sarah@example.com",
        scheduled_in_days: 7,
        state: RequestState::New,
    },
    RequestRow {
        request_type: RequestType::Corrective,
        subject: "Server overheating",
        description: "Temperature alerts triggered, cooling fans may need replacement",
        equipment: "SRV-2023-007",
        technician: "mike@example.com",
        scheduled_in_days: 0,
        state: RequestState::InProgress,
    },
    RequestRow {
        request_type: RequestType::Preventive,
        subject: "Monthly CNC calibration",
        description: "Regular monthly calibration and precision check",
        equipment: "CNC-2020-008",
        technician: "john@example.com",
        scheduled_in_days: 14,
        state: RequestState::New,
    },
    RequestRow {
        request_type: RequestType::Corrective,
        subject: "Control panel malfunction",
        description: "Emergency stop button not responding properly",
        equipment: "HP-2022-005",
        technician: "john@example.com",
        scheduled_in_days: -2,
        state: RequestState::Repaired,
    },
];
