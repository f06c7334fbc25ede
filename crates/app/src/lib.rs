//! # gearguard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - one repository per table (`DepartmentRepository`, `EquipmentRepository`,
//!     `RequestRepository`, …)
//!   - `Storage`: a bundle of repositories sharing one backing store
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthService`: signup, login, session resolution
//!   - `EquipmentService`: equipment CRUD with team auto-fill
//!   - `RequestService`: request filing, workflow moves, kanban and calendar
//!   - directory services for departments, teams, employees, categories and
//!     work centers
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `gearguard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
