//! Timetable statistics.
//!
//! Summarizes a filled timetable: sessions per (group, day), per
//! (faculty, day) and per subject, plus grid fill rate. Useful for
//! checking a generated timetable against the daily caps.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled cells | Number of non-empty cells |
//! | Fill rate | Filled cells / (D × S) |
//! | Group load | Sessions per (group, day) |
//! | Faculty load | Sessions per (faculty, day) |
//! | Subject hours | Sessions per subject, all groups combined |

use std::collections::HashMap;

use crate::models::Timetable;

/// Load and coverage figures of a timetable.
#[derive(Debug, Clone, Default)]
pub struct TimetableStats {
    /// Number of filled cells.
    pub filled_cells: usize,
    /// Filled cells over total cells (0.0..1.0).
    pub fill_rate: f64,
    /// (group ID, day) → sessions.
    pub group_day_sessions: HashMap<(String, usize), usize>,
    /// (faculty ID, day) → sessions.
    pub faculty_day_sessions: HashMap<(String, usize), usize>,
    /// Subject ID → sessions across all groups.
    pub subject_sessions: HashMap<String, usize>,
}

impl TimetableStats {
    /// Computes statistics from a timetable.
    pub fn calculate(timetable: &Timetable) -> Self {
        let mut stats = Self::default();

        for (day, _, a) in timetable.iter() {
            stats.filled_cells += 1;
            *stats
                .group_day_sessions
                .entry((a.group_id.clone(), day))
                .or_insert(0) += 1;
            *stats
                .faculty_day_sessions
                .entry((a.faculty_id.clone(), day))
                .or_insert(0) += 1;
            *stats
                .subject_sessions
                .entry(a.subject_id.clone())
                .or_insert(0) += 1;
        }

        let total = timetable.shape().cell_count();
        stats.fill_rate = if total == 0 {
            0.0
        } else {
            stats.filled_cells as f64 / total as f64
        };

        stats
    }

    /// Sessions placed for a subject (0 if none).
    pub fn subject_hours(&self, subject_id: &str) -> usize {
        self.subject_sessions.get(subject_id).copied().unwrap_or(0)
    }

    /// Busiest day of any group.
    pub fn max_group_sessions_per_day(&self) -> usize {
        self.group_day_sessions.values().copied().max().unwrap_or(0)
    }

    /// Busiest day of any faculty member.
    pub fn max_faculty_sessions_per_day(&self) -> usize {
        self.faculty_day_sessions.values().copied().max().unwrap_or(0)
    }

    /// Whether no group exceeds `group_cap` and no faculty exceeds
    /// `faculty_cap` sessions on any day.
    pub fn within_caps(&self, group_cap: usize, faculty_cap: usize) -> bool {
        self.max_group_sessions_per_day() <= group_cap
            && self.max_faculty_sessions_per_day() <= faculty_cap
    }
}
