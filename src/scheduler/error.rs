//! Error types for timetable generation.

/// Errors that abort a scheduling run.
///
/// A run that fails produces no timetable at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A subject's weekly hours cannot all be placed under the day, slot,
    /// availability and daily-cap constraints.
    #[error("could not schedule all required hours for {subject_code} given current constraints")]
    Unsatisfiable { subject_code: String },

    /// A subject references a faculty ID that is not in the entity set.
    #[error("subject {subject_code} references unknown faculty '{faculty_id}'")]
    UnknownFaculty {
        subject_code: String,
        faculty_id: String,
    },

    /// A session had to be placed but the entity set has no rooms.
    #[error("cannot place {subject_code}: no rooms available")]
    NoRooms { subject_code: String },
}

impl ScheduleError {
    /// Code of the subject that caused the failure.
    pub fn subject_code(&self) -> &str {
        match self {
            Self::Unsatisfiable { subject_code }
            | Self::UnknownFaculty { subject_code, .. }
            | Self::NoRooms { subject_code } => subject_code,
        }
    }
}
