//! Room and group models.
//!
//! Rooms host sessions; groups (student cohorts) attend them. Neither
//! carries constraints of its own beyond the group's daily session cap,
//! which the scheduler enforces.

use serde::{Deserialize, Serialize};

/// A room that can host sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room number as displayed (e.g., "B-204").
    #[serde(default)]
    pub number: String,
    /// Seating capacity.
    #[serde(default, deserialize_with = "super::count_or_zero")]
    pub capacity: u32,
}

/// A student group attending sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Room {
    /// Creates a room with no number and zero capacity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: String::new(),
            capacity: 0,
        }
    }

    /// Sets the room number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Group {
    /// Creates a group with no name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
