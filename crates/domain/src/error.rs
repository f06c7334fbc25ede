//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GearGuardError`] via `From`.

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum GearGuardError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("email already registered")]
    EmailTaken,

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    #[error("invalid request number: {0}")]
    InvalidRequestNumber(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A record looked up by identifier does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not authenticated")]
    NotAuthenticated,
}
