//! # gearguard-domain
//!
//! Pure domain model for the gearguard maintenance tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **directory** records (departments, maintenance teams, employees)
//! - Define **Equipment** and its **categories** and **work centers**
//! - Define **Maintenance requests**, their workflow states and request numbering
//! - Project requests into the **kanban** board and **calendar** views
//! - Encode and decode **session tokens** and hash **passwords**
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod calendar;
pub mod category;
pub mod department;
pub mod employee;
pub mod equipment;
pub mod kanban;
pub mod password;
pub mod request;
pub mod session;
pub mod team;
pub mod work_center;
