//! Session tokens carried in the `gearguard_session` cookie.
//!
//! A token is `"{employee_id}-{random uuid}"`. The server keeps no session
//! table: the employee id is read back from the prefix. Tokens are not
//! signed, so anyone who can guess an id can forge one.

use std::fmt;

use crate::id::EmployeeId;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "gearguard_session";

/// Cookie lifetime: seven days.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// An opaque-looking session token bound to one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh token for `employee_id`.
    #[must_use]
    pub fn issue(employee_id: EmployeeId) -> Self {
        Self(format!("{employee_id}-{}", uuid::Uuid::new_v4()))
    }

    /// Wrap a raw cookie value.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The employee this token names, if it is well-formed.
    #[must_use]
    pub fn employee_id(&self) -> Option<EmployeeId> {
        let (prefix, rest) = self.0.split_once('-')?;
        if rest.is_empty() {
            return None;
        }
        prefix.parse::<i64>().ok().filter(|id| *id > 0).map(EmployeeId::new)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
