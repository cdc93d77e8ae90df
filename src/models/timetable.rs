//! Timetable (slot grid) model.
//!
//! A timetable is a D × S grid of (day, slot) cells. Each cell is empty or
//! holds exactly one session assignment. The grid itself performs no
//! overwrite protection: callers check [`Timetable::is_empty_at`] before
//! calling [`Timetable::set`].

use serde::{Deserialize, Serialize};

use super::GridShape;

/// One session: a subject taught by a faculty member to a group in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned subject ID.
    pub subject_id: String,
    /// Subject code (denormalized for display and diagnostics).
    pub subject_code: String,
    /// Teaching faculty ID.
    pub faculty_id: String,
    /// Hosting room ID.
    pub room_id: String,
    /// Attending group ID.
    pub group_id: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        subject_id: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            subject_code: String::new(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
            group_id: group_id.into(),
        }
    }

    /// Sets the subject code.
    pub fn with_subject_code(mut self, code: impl Into<String>) -> Self {
        self.subject_code = code.into();
        self
    }
}

/// A filled (or partially filled) weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    shape: GridShape,
    /// Row-major cells: `cells[day][slot]`.
    cells: Vec<Vec<Option<Assignment>>>,
}

impl Timetable {
    /// Creates a grid with every cell empty.
    pub fn new(shape: GridShape) -> Self {
        let cells = vec![vec![None; shape.slot_count()]; shape.day_count()];
        Self { shape, cells }
    }

    /// The day/slot labels of this grid.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Number of days (rows).
    pub fn days(&self) -> usize {
        self.cells.len()
    }

    /// Number of slots per day (columns).
    pub fn slots(&self) -> usize {
        self.shape.slot_count()
    }

    /// Returns the assignment at (day, slot); `None` if empty or out of range.
    pub fn get(&self, day: usize, slot: usize) -> Option<&Assignment> {
        self.cells.get(day)?.get(slot)?.as_ref()
    }

    /// Whether the cell at (day, slot) exists and is empty.
    pub fn is_empty_at(&self, day: usize, slot: usize) -> bool {
        matches!(self.cells.get(day).and_then(|row| row.get(slot)), Some(None))
    }

    /// Writes an assignment into (day, slot), replacing whatever is there.
    ///
    /// # Panics
    /// Panics if (day, slot) is outside the grid.
    pub fn set(&mut self, day: usize, slot: usize, assignment: Assignment) {
        self.cells[day][slot] = Some(assignment);
    }

    /// Iterates filled cells as `(day, slot, assignment)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Assignment)> {
        self.cells.iter().enumerate().flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(slot, cell)| cell.as_ref().map(|a| (day, slot, a)))
        })
    }

    /// Number of filled cells.
    pub fn assignment_count(&self) -> usize {
        self.iter().count()
    }

    /// Whether no cell is filled.
    pub fn is_blank(&self) -> bool {
        self.assignment_count() == 0
    }

    /// Filled cells attended by a group.
    pub fn assignments_for_group(&self, group_id: &str) -> Vec<(usize, usize, &Assignment)> {
        self.iter().filter(|(_, _, a)| a.group_id == group_id).collect()
    }

    /// Filled cells taught by a faculty member.
    pub fn assignments_for_faculty(&self, faculty_id: &str) -> Vec<(usize, usize, &Assignment)> {
        self.iter()
            .filter(|(_, _, a)| a.faculty_id == faculty_id)
            .collect()
    }

    /// Filled cells for a subject.
    pub fn assignments_for_subject(&self, subject_id: &str) -> Vec<(usize, usize, &Assignment)> {
        self.iter()
            .filter(|(_, _, a)| a.subject_id == subject_id)
            .collect()
    }
}
