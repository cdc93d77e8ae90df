//! Greedy first-fit timetable scheduler.
//!
//! # Algorithm
//!
//! 1. For each group, in input order,
//! 2. for each subject, in input order,
//! 3. while the subject still lacks weekly hours,
//! 4. scan cells row-major (all slots of day 0, then day 1, ...) and take
//!    the first cell that is empty, falls in a slot the subject's faculty
//!    is available for, and keeps both the faculty and the group under
//!    their daily caps.
//! 5. If a scan finds no such cell, the whole run fails.
//!
//! There is no backtracking: a placed session is never moved.
//!
//! # Complexity
//! O(g * h * d * s) where g=groups, h=total weekly hours, d=days, s=slots.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    ConstraintTracker, FirstRoom, FulfillmentMode, RoomSelector, ScheduleError, SchedulerConfig,
};
use crate::models::{Assignment, EntitySet, Faculty, GridShape, Group, Room, Subject, Timetable};

/// Input container for scheduling.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Faculties, subjects, rooms and groups.
    pub entities: EntitySet,
    /// Day and slot labels of the grid.
    pub shape: GridShape,
}

impl ScheduleRequest {
    /// Creates a request over the standard week.
    pub fn new(entities: EntitySet) -> Self {
        Self {
            entities,
            shape: GridShape::standard(),
        }
    }

    /// Sets the grid shape.
    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Greedy first-fit timetable scheduler.
///
/// Holds configuration only; every call to [`schedule`](Self::schedule)
/// builds its own grid and counters.
///
/// # Example
///
/// ```
/// use u_timetable::models::{EntitySet, Faculty, Group, Room, Subject};
/// use u_timetable::scheduler::{ScheduleRequest, SimpleScheduler};
///
/// let entities = EntitySet::new()
///     .with_faculty(Faculty::new("F1").with_slot("8:35-9:25"))
///     .with_subject(Subject::new("S1").with_code("CS101").with_weekly_hours(1).taught_by("F1"))
///     .with_room(Room::new("R1"))
///     .with_group(Group::new("G1"));
///
/// let timetable = SimpleScheduler::new()
///     .schedule_request(&ScheduleRequest::new(entities))
///     .unwrap();
/// assert_eq!(timetable.get(0, 0).unwrap().subject_code, "CS101");
/// ```
#[derive(Debug, Clone)]
pub struct SimpleScheduler {
    config: SchedulerConfig,
    room_selector: Arc<dyn RoomSelector>,
}

impl SimpleScheduler {
    /// Creates a scheduler with the default configuration and [`FirstRoom`].
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            room_selector: Arc::new(FirstRoom),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the weekly-hour accounting mode.
    pub fn with_fulfillment(mut self, mode: FulfillmentMode) -> Self {
        self.config.fulfillment = mode;
        self
    }

    /// Sets the room selection strategy.
    pub fn with_room_selector(mut self, selector: impl RoomSelector + 'static) -> Self {
        self.room_selector = Arc::new(selector);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Fills a fresh timetable for `entities` over `shape`.
    ///
    /// # Errors
    /// Returns [`ScheduleError::Unsatisfiable`] for the first subject whose
    /// weekly hours cannot all be placed. No partial timetable is returned.
    pub fn schedule(
        &self,
        entities: &EntitySet,
        shape: &GridShape,
    ) -> Result<Timetable, ScheduleError> {
        let mut timetable = Timetable::new(shape.clone());
        let mut tracker = ConstraintTracker::new(
            &entities.groups,
            &entities.faculties,
            shape.day_count(),
            shape.slot_count(),
        );
        // (subject, group) → sessions placed; group is None when counting per subject.
        let mut placed: HashMap<(&str, Option<&str>), u32> = HashMap::new();

        tracing::info!(
            "generating timetable: {} groups, {} subjects, {}x{} grid, room strategy '{}'",
            entities.groups.len(),
            entities.subjects.len(),
            shape.day_count(),
            shape.slot_count(),
            self.room_selector.name()
        );

        for group in &entities.groups {
            for subject in &entities.subjects {
                let key = match self.config.fulfillment {
                    FulfillmentMode::PerSubject => (subject.id.as_str(), None),
                    FulfillmentMode::PerGroup => (subject.id.as_str(), Some(group.id.as_str())),
                };

                while placed.get(&key).copied().unwrap_or(0) < subject.weekly_hours {
                    let faculty = entities.faculty(&subject.assigned_faculty).ok_or_else(|| {
                        ScheduleError::UnknownFaculty {
                            subject_code: subject.code.clone(),
                            faculty_id: subject.assigned_faculty.clone(),
                        }
                    })?;

                    let Some((day, slot, room)) = self.find_cell(
                        &entities.rooms,
                        &timetable,
                        &tracker,
                        group,
                        subject,
                        faculty,
                    )?
                    else {
                        tracing::warn!(
                            "no cell left for subject {} (group {}) after {} of {} hours",
                            subject.code,
                            group.id,
                            placed.get(&key).copied().unwrap_or(0),
                            subject.weekly_hours
                        );
                        return Err(ScheduleError::Unsatisfiable {
                            subject_code: subject.code.clone(),
                        });
                    };

                    timetable.set(
                        day,
                        slot,
                        Assignment::new(&subject.id, &faculty.id, &room.id, &group.id)
                            .with_subject_code(&subject.code),
                    );
                    tracker.record_placement(&group.id, &faculty.id, day);
                    *placed.entry(key).or_insert(0) += 1;

                    tracing::debug!(
                        "placed {} for group {} at day {} slot {} in room {}",
                        subject.code,
                        group.id,
                        day,
                        slot,
                        room.id
                    );
                }
            }
        }

        tracing::info!(
            "timetable generated: {} of {} cells filled",
            timetable.assignment_count(),
            shape.cell_count()
        );

        Ok(timetable)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Timetable, ScheduleError> {
        self.schedule(&request.entities, &request.shape)
    }

    /// First acceptable (day, slot) cell in row-major order, with its room.
    fn find_cell<'a>(
        &self,
        rooms: &'a [Room],
        timetable: &Timetable,
        tracker: &ConstraintTracker,
        group: &Group,
        subject: &Subject,
        faculty: &Faculty,
    ) -> Result<Option<(usize, usize, &'a Room)>, ScheduleError> {
        let shape = timetable.shape();

        for day in 0..shape.day_count() {
            for (slot, label) in shape.slots().iter().enumerate() {
                if !timetable.is_empty_at(day, slot)
                    || !faculty.is_available_for(label)
                    || !tracker.can_place_for_faculty(&faculty.id, day)
                    || !tracker.can_place_for_group(&group.id, day)
                {
                    continue;
                }

                if rooms.is_empty() {
                    return Err(ScheduleError::NoRooms {
                        subject_code: subject.code.clone(),
                    });
                }

                if let Some(room) = self.room_selector.select(rooms, day, slot, timetable) {
                    return Ok(Some((day, slot, room)));
                }
            }
        }

        Ok(None)
    }
}

impl Default for SimpleScheduler {
    fn default() -> Self {
        Self::new()
    }
}
