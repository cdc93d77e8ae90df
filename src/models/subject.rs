//! Subject model.
//!
//! A subject needs a fixed number of sessions per week and is taught by
//! exactly one faculty member, referenced by ID.

use serde::{Deserialize, Serialize};

/// A subject (course) to be timetabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Course code (e.g., "CS101"). Used in diagnostics.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Required sessions per week.
    #[serde(default, deserialize_with = "super::count_or_zero")]
    pub weekly_hours: u32,
    /// ID of the faculty member teaching this subject.
    #[serde(default)]
    pub assigned_faculty: String,
}

impl Subject {
    /// Creates a subject with zero weekly hours and no faculty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            weekly_hours: 0,
            assigned_faculty: String::new(),
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the required sessions per week.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Sets the teaching faculty.
    pub fn taught_by(mut self, faculty_id: impl Into<String>) -> Self {
        self.assigned_faculty = faculty_id.into();
        self
    }
}
