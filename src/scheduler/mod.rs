//! Greedy timetable scheduler and its supporting pieces.
//!
//! # Algorithm
//!
//! `SimpleScheduler` places each subject's weekly sessions into the first
//! cell (row-major) that satisfies faculty availability and the daily caps
//! tracked by `ConstraintTracker`. It is not optimal and never backtracks:
//! the first subject that cannot be fully placed fails the whole run.
//!
//! # Daily caps
//!
//! - A group attends at most 7 sessions per day (placed count below 7).
//! - A faculty member teaches only while more than 4 periods of the day
//!   remain free (at most 5 sessions on the standard 9-slot day).
//!
//! # Room selection
//!
//! Rooms are picked by a `RoomSelector` strategy; `FirstRoom` (the default)
//! always returns the first room.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling", Sec. 2
//! - de Werra (1985), "An introduction to timetabling"

mod config;
mod error;
mod room;
mod simple;
mod stats;
mod tracker;

pub use config::{FulfillmentMode, SchedulerConfig};
pub use error::ScheduleError;
pub use room::{FirstRoom, RoomSelector};
pub use simple::{ScheduleRequest, SimpleScheduler};
pub use stats::TimetableStats;
pub use tracker::{ConstraintTracker, FACULTY_FREE_PERIOD_FLOOR, GROUP_DAILY_SESSION_LIMIT};
