//! Weekly class timetabling: greedy slot assignment under daily caps.
//!
//! Assigns recurring weekly sessions (subject + faculty + room + group) to a
//! fixed grid of day/time slots, honoring faculty availability and daily
//! workload caps.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Faculty`, `Subject`, `Room`, `Group`,
//!   `EntitySet`, `GridShape`, `Timetable`, `Assignment`
//! - **`scheduler`**: Greedy slot assignment (`SimpleScheduler`), per-day
//!   counters (`ConstraintTracker`), room strategies and timetable statistics
//! - **`validation`**: Input integrity checks (missing fields, empty
//!   collections, dangling faculty references, duplicate IDs)
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{EntitySet, Faculty, Group, GridShape, Room, Subject};
//! use u_timetable::scheduler::SimpleScheduler;
//!
//! let shape = GridShape::standard();
//! let entities = EntitySet::new()
//!     .with_faculty(Faculty::new("F1").with_name("Dr. Rao").with_slots(shape.slots().to_vec()))
//!     .with_subject(Subject::new("S1").with_code("CS101").with_weekly_hours(3).taught_by("F1"))
//!     .with_room(Room::new("R1").with_number("101").with_capacity(40))
//!     .with_group(Group::new("G1").with_name("CSE-A"));
//!
//! let timetable = SimpleScheduler::new().schedule(&entities, &shape).unwrap();
//! assert_eq!(timetable.assignment_count(), 3);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod models;
pub mod scheduler;
pub mod validation;
