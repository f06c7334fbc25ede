//! # gearguard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** under `/api` (auth, departments, teams,
//!   employees, equipment categories, equipment, requests, work centers)
//! - Issue, read and clear the `gearguard_session` cookie
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors onto status codes with a `{"error": "..."}` body
//!
//! ## Dependency rule
//! Depends on `gearguard-app` (for port traits and services) and
//! `gearguard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod session;
pub mod state;
