//! Entity set: the complete input of one timetabling run.
//!
//! The serialized form is a record with four named sequences
//! (`faculties`, `subjects`, `rooms`, `groups`). Missing sequences
//! deserialize as empty.

use serde::{Deserialize, Serialize};

use super::{Faculty, Group, Room, Subject};

/// Faculties, subjects, rooms and groups for one run.
///
/// Collection order matters: the scheduler iterates groups and subjects
/// in input order and the default room strategy picks the first room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    /// Teaching staff.
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    /// Subjects to timetable.
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Rooms available for sessions.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Student groups.
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl EntitySet {
    /// Creates an empty entity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculties.push(faculty);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Finds a faculty by ID.
    pub fn faculty(&self, id: &str) -> Option<&Faculty> {
        self.faculties.iter().find(|f| f.id == id)
    }

    /// Finds a subject by ID.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds a group by ID.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Parses an entity set from its JSON record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the entity set to its JSON record.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridShape;
    use crate::validation::{validate_input, ValidationErrorKind};

    #[test]
    fn test_lookups() {
        let set = EntitySet::new()
            .with_faculty(Faculty::new("F1").with_name("Dr. Rao"))
            .with_subject(Subject::new("S1").with_code("CS101"))
            .with_room(Room::new("R1"))
            .with_group(Group::new("G1"));

        assert_eq!(set.faculty("F1").unwrap().name, "Dr. Rao");
        assert_eq!(set.subject("S1").unwrap().code, "CS101");
        assert!(set.room("R1").is_some());
        assert!(set.group("G1").is_some());
        assert!(set.faculty("F9").is_none());
    }

    #[test]
    fn test_parse_stored_record() {
        let json = r#"{
            "faculties": [{"id": "1", "name": "Dr. Rao", "availableSlots": ["8:35-9:25"]}],
            "subjects": [{"id": "2", "code": "CS101", "name": "Programming",
                          "weeklyHours": 3, "assignedFaculty": "1"}],
            "rooms": [{"id": "3", "number": "101", "capacity": 40}],
            "groups": [{"id": "4", "name": "CSE-A"}]
        }"#;

        let set = EntitySet::from_json(json).unwrap();
        assert_eq!(set.faculties[0].available_slots, vec!["8:35-9:25".to_string()]);
        assert_eq!(set.subjects[0].weekly_hours, 3);
        assert_eq!(set.subjects[0].assigned_faculty, "1");
        assert_eq!(set.rooms[0].capacity, 40);
        assert_eq!(set.groups[0].name, "CSE-A");
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let set = EntitySet::from_json(r#"{"groups": [{"id": "G1", "name": "A"}]}"#).unwrap();
        assert!(set.faculties.is_empty());
        assert!(set.subjects.is_empty());
        assert!(set.rooms.is_empty());
        assert_eq!(set.groups.len(), 1);
    }

    #[test]
    fn test_null_counts_load_as_zero() {
        let json = r#"{
            "faculties": [{"id": "1", "name": "Dr. Rao", "availableSlots": ["8:35-9:25"]}],
            "subjects": [{"id": "2", "code": "CS101", "name": "Programming",
                          "weeklyHours": null, "assignedFaculty": "1"}],
            "rooms": [{"id": "3", "number": "101", "capacity": null}],
            "groups": [{"id": "4", "name": "CSE-A"}]
        }"#;

        let set = EntitySet::from_json(json).unwrap();
        assert_eq!(set.subjects[0].weekly_hours, 0);
        assert_eq!(set.rooms[0].capacity, 0);

        let errors = validate_input(&set, &GridShape::standard()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MissingField));
        assert_eq!(errors[0].message, "Subject CS101 has no weekly hours");
        assert_eq!(errors[1].message, "Room 101 has no capacity");
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let set = EntitySet::new()
            .with_subject(Subject::new("S1").with_weekly_hours(2).taught_by("F1"));
        let json = set.to_json().unwrap();
        assert!(json.contains("\"weeklyHours\":2"));
        assert!(json.contains("\"assignedFaculty\":\"F1\""));
        assert_eq!(EntitySet::from_json(&json).unwrap(), set);
    }
}
