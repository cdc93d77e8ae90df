//! Faculty model.
//!
//! A faculty member teaches subjects and is available only in a subset of
//! the grid's slot labels. Availability is by slot label, not by day: a
//! faculty available at `8:35-9:25` is available in that slot on every day.

use serde::{Deserialize, Serialize};

/// A faculty member who teaches one or more subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Slot labels this faculty can teach in.
    #[serde(default)]
    pub available_slots: Vec<String>,
}

impl Faculty {
    /// Creates a faculty with no name and no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            available_slots: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds one available slot label.
    pub fn with_slot(mut self, label: impl Into<String>) -> Self {
        self.available_slots.push(label.into());
        self
    }

    /// Replaces the available slot labels.
    pub fn with_slots<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_slots = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this faculty can teach in the slot with the given label.
    pub fn is_available_for(&self, label: &str) -> bool {
        self.available_slots.iter().any(|s| s == label)
    }
}
