//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for register `last_changed` values.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
