//! Per-day workload counters for one scheduling run.
//!
//! Tracks, for every (group, day), how many sessions the group already has,
//! and for every (faculty, day), how many of the day's slots the faculty
//! still has free. Counters only move forward: there is no rollback.

use std::collections::HashMap;

use crate::models::{Faculty, Group};

/// A group takes another session on a day only while its placed count
/// for that day is below this limit (at most 7 sessions per day).
pub const GROUP_DAILY_SESSION_LIMIT: u32 = 7;

/// A faculty member teaches another session on a day only while more than
/// this many of the day's periods are still free.
///
/// With the standard 9-slot day this allows 5 sessions per day.
pub const FACULTY_FREE_PERIOD_FLOOR: u32 = 4;

/// Per-run daily counters for groups and faculty.
#[derive(Debug, Clone)]
pub struct ConstraintTracker {
    slots_per_day: u32,
    days: usize,
    /// group ID → sessions placed, indexed by day.
    group_placed: HashMap<String, Vec<u32>>,
    /// faculty ID → free periods remaining, indexed by day.
    faculty_free: HashMap<String, Vec<u32>>,
}

impl ConstraintTracker {
    /// Creates counters for every group × day (0 placed) and every
    /// faculty × day (`slots_per_day` free).
    pub fn new(groups: &[Group], faculties: &[Faculty], days: usize, slots_per_day: usize) -> Self {
        let slots_per_day = u32::try_from(slots_per_day).unwrap_or(u32::MAX);
        let group_placed = groups
            .iter()
            .map(|g| (g.id.clone(), vec![0; days]))
            .collect();
        let faculty_free = faculties
            .iter()
            .map(|f| (f.id.clone(), vec![slots_per_day; days]))
            .collect();

        Self {
            slots_per_day,
            days,
            group_placed,
            faculty_free,
        }
    }

    /// Sessions already placed for a group on a day.
    pub fn group_placed(&self, group_id: &str, day: usize) -> u32 {
        self.group_placed
            .get(group_id)
            .and_then(|days| days.get(day))
            .copied()
            .unwrap_or(0)
    }

    /// Free periods remaining for a faculty member on a day.
    pub fn faculty_free(&self, faculty_id: &str, day: usize) -> u32 {
        self.faculty_free
            .get(faculty_id)
            .and_then(|days| days.get(day))
            .copied()
            .unwrap_or(self.slots_per_day)
    }

    /// Whether the group can take one more session on `day`.
    pub fn can_place_for_group(&self, group_id: &str, day: usize) -> bool {
        self.group_placed(group_id, day) < GROUP_DAILY_SESSION_LIMIT
    }

    /// Whether the faculty member still has more than
    /// [`FACULTY_FREE_PERIOD_FLOOR`] free periods on `day`.
    pub fn can_place_for_faculty(&self, faculty_id: &str, day: usize) -> bool {
        self.faculty_free(faculty_id, day) > FACULTY_FREE_PERIOD_FLOOR
    }

    /// Records one placed session for `group_id` taught by `faculty_id`.
    pub fn record_placement(&mut self, group_id: &str, faculty_id: &str, day: usize) {
        let days = self.days;
        let slots_per_day = self.slots_per_day;

        let placed = self
            .group_placed
            .entry(group_id.to_string())
            .or_insert_with(|| vec![0; days]);
        if let Some(count) = placed.get_mut(day) {
            *count += 1;
        }

        let free = self
            .faculty_free
            .entry(faculty_id.to_string())
            .or_insert_with(|| vec![slots_per_day; days]);
        if let Some(count) = free.get_mut(day) {
            *count = count.saturating_sub(1);
        }
    }
}
