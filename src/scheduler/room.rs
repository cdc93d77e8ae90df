//! Room selection strategies.
//!
//! The scheduler asks a [`RoomSelector`] for a room once it has found a
//! (day, slot) cell that satisfies every other constraint. Returning
//! `None` rejects the cell and the scan continues with the next one.

use std::fmt::Debug;

use crate::models::{Room, Timetable};

/// Chooses the room for a session about to be placed at (day, slot).
pub trait RoomSelector: Debug + Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Picks a room from `rooms` for the cell at (day, slot).
    ///
    /// `timetable` is the grid as filled so far.
    fn select<'a>(
        &self,
        rooms: &'a [Room],
        day: usize,
        slot: usize,
        timetable: &Timetable,
    ) -> Option<&'a Room>;
}

/// Always the first room in input order. Ignores capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRoom;

impl RoomSelector for FirstRoom {
    fn name(&self) -> &str {
        "first-room"
    }

    fn select<'a>(
        &self,
        rooms: &'a [Room],
        _day: usize,
        _slot: usize,
        _timetable: &Timetable,
    ) -> Option<&'a Room> {
        rooms.first()
    }
}
