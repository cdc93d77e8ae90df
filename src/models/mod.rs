//! Timetabling domain models.
//!
//! Provides the data types for a weekly timetabling problem (the entity
//! set and grid shape) and its solution (the filled timetable).
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training Center |
//! |-------------|-----------|--------|-----------------|
//! | Faculty | Lecturer | Teacher | Trainer |
//! | Subject | Course | Subject | Module |
//! | Group | Section | Class | Cohort |
//! | Timetable | Weekly Timetable | Class Schedule | Session Plan |

mod entity_set;
mod faculty;
mod room;
mod shape;
mod subject;
mod timetable;

pub use entity_set::EntitySet;
pub use faculty::Faculty;
pub use room::{Group, Room};
pub use shape::{GridShape, DAYS, TIME_SLOTS};
pub use subject::Subject;
pub use timetable::{Assignment, Timetable};

use serde::{Deserialize, Deserializer};

/// Reads a count that stored records may hold as `null` (a blank form
/// field); `null` becomes 0 so validation can report it as missing.
pub(crate) fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}
