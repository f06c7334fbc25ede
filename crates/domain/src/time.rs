//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// UTC timestamp used for `created_at`, scheduled dates, warranty ends, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Calendar year of a timestamp, used to scope request numbers.
#[must_use]
pub fn year_of(ts: Timestamp) -> i32 {
    ts.year()
}
