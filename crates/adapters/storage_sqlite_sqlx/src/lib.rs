//! # gearguard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `gearguard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `gearguard-app` (for port traits) and `gearguard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod category_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod equipment_repo;
pub mod error;
pub mod pool;
pub mod request_repo;
pub mod storage;
pub mod team_repo;
pub mod work_center_repo;

mod row;

#[cfg(test)]
mod fixtures;

pub use storage::SqliteStorage;
