//! Input validation for timetabling problems.
//!
//! Checks the entity set before scheduling. Detects:
//! - Empty collections (no faculty, subjects, rooms or groups)
//! - Missing required fields (names, codes, room numbers)
//! - Faculty with no available slots, or slots outside the grid
//! - Subjects with zero weekly hours or no (or an unknown) faculty
//! - Rooms with zero capacity
//! - Duplicate IDs
//!
//! The scheduler does not call this itself; callers validate first.

use std::collections::HashSet;

use crate::models::{EntitySet, GridShape};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required collection has no entries.
    EmptyCollection,
    /// A required field is blank or zero.
    MissingField,
    /// A faculty member has no available slots.
    NoAvailability,
    /// A faculty slot label is not part of the grid.
    UnknownSlot,
    /// A subject references a faculty that doesn't exist.
    InvalidFacultyReference,
    /// Two entities in one collection share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an entity set against a grid shape.
///
/// Checks:
/// 1. Every collection is non-empty
/// 2. No duplicate IDs within a collection
/// 3. Every faculty has a name and at least one available slot in the grid
/// 4. Every subject has a code, name, positive weekly hours and a known faculty
/// 5. Every room has a number and positive capacity
/// 6. Every group has a name
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(entities: &EntitySet, shape: &GridShape) -> ValidationResult {
    let mut errors = Vec::new();

    for (label, len) in [
        ("faculty member", entities.faculties.len()),
        ("subject", entities.subjects.len()),
        ("room", entities.rooms.len()),
        ("student group", entities.groups.len()),
    ] {
        if len == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCollection,
                format!("Please add at least one {label}"),
            ));
        }
    }

    check_duplicates(
        "faculty",
        entities.faculties.iter().map(|f| f.id.as_str()),
        &mut errors,
    );
    check_duplicates(
        "subject",
        entities.subjects.iter().map(|s| s.id.as_str()),
        &mut errors,
    );
    check_duplicates(
        "room",
        entities.rooms.iter().map(|r| r.id.as_str()),
        &mut errors,
    );
    check_duplicates(
        "group",
        entities.groups.iter().map(|g| g.id.as_str()),
        &mut errors,
    );

    for faculty in &entities.faculties {
        if faculty.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Faculty '{}' has no name", faculty.id),
            ));
        }
        if faculty.available_slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoAvailability,
                format!("Faculty {} has no available slots", faculty.name),
            ));
        }
        for label in &faculty.available_slots {
            if !shape.has_slot(label) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlot,
                    format!("Faculty {} lists unknown slot '{label}'", faculty.name),
                ));
            }
        }
    }

    let faculty_ids: HashSet<&str> = entities.faculties.iter().map(|f| f.id.as_str()).collect();

    for subject in &entities.subjects {
        if subject.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Subject '{}' has no course code", subject.id),
            ));
        }
        if subject.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Subject {} has no name", subject.code),
            ));
        }
        if subject.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Subject {} has no weekly hours", subject.code),
            ));
        }
        if subject.assigned_faculty.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Subject {} has no assigned faculty", subject.code),
            ));
        } else if !faculty_ids.contains(subject.assigned_faculty.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidFacultyReference,
                format!(
                    "Subject {} references unknown faculty '{}'",
                    subject.code, subject.assigned_faculty
                ),
            ));
        }
    }

    for room in &entities.rooms {
        if room.number.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Room '{}' has no number", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Room {} has no capacity", room.number),
            ));
        }
    }

    for group in &entities.groups {
        if group.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Group '{}' has no name", group.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {collection} ID: {id}"),
            ));
        }
    }
}
