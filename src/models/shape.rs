//! Grid shape: the ordered day and slot labels.
//!
//! Labels only matter for ordering, cardinality and matching against
//! faculty availability. Their exact text is a presentation concern.

use serde::{Deserialize, Serialize};

/// The five teaching days, Monday first.
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// The nine daily time slots, earliest first.
pub const TIME_SLOTS: [&str; 9] = [
    "8:35-9:25",
    "9:30-10:20",
    "10:25-11:15",
    "11:20-12:10",
    "12:15-13:05",
    "13:10-14:00",
    "14:05-14:55",
    "15:00-15:50",
    "15:55-16:45",
];

/// Ordered day labels (grid rows) and slot labels (grid columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    days: Vec<String>,
    slots: Vec<String>,
}

impl GridShape {
    /// Creates a shape from arbitrary day and slot labels.
    pub fn new<D, S>(days: D, slots: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard week: [`DAYS`] × [`TIME_SLOTS`].
    pub fn standard() -> Self {
        Self::new(DAYS, TIME_SLOTS)
    }

    /// Day labels in order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Slot labels in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of days (D).
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of slots per day (S).
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Total cell count (D × S).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.day_count() * self.slot_count()
    }

    /// Label of the slot at `index`.
    pub fn slot_label(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Label of the day at `index`.
    pub fn day_label(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(String::as_str)
    }

    /// Whether `label` is one of this shape's slot labels.
    pub fn has_slot(&self, label: &str) -> bool {
        self.slots.iter().any(|s| s == label)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::standard()
    }
}
