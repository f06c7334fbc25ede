//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod auth_service;
pub mod category_service;
pub mod department_service;
pub mod employee_service;
pub mod equipment_service;
pub mod request_service;
pub mod team_service;
pub mod work_center_service;

/// Sorted ids without repeats, for batched name lookups.
pub(crate) fn distinct<I: Ord>(ids: impl Iterator<Item = I>) -> Vec<I> {
    let mut ids: Vec<I> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
