//! End-to-end timetabling scenarios.

use u_timetable::models::{EntitySet, Faculty, GridShape, Group, Room, Subject, DAYS, TIME_SLOTS};
use u_timetable::scheduler::{FulfillmentMode, ScheduleError, SimpleScheduler, TimetableStats};
use u_timetable::validation::validate_input;

fn faculty_all_slots(id: &str) -> Faculty {
    Faculty::new(id).with_name(format!("Prof {id}")).with_slots(TIME_SLOTS)
}

fn subject(id: &str, code: &str, hours: u32, faculty: &str) -> Subject {
    Subject::new(id)
        .with_code(code)
        .with_name(format!("{code} course"))
        .with_weekly_hours(hours)
        .taught_by(faculty)
}

fn room() -> Room {
    Room::new("R1").with_number("101").with_capacity(40)
}

fn monday_only() -> GridShape {
    GridShape::new(["Monday"], TIME_SLOTS)
}

#[test]
fn single_session_goes_to_first_cell() {
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_subject(subject("S1", "CS101", 1, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));

    let t = SimpleScheduler::new()
        .schedule(&set, &GridShape::standard())
        .unwrap();

    assert_eq!(t.assignment_count(), 1);
    let a = t.get(0, 0).unwrap();
    assert_eq!(a.subject_id, "S1");
    assert_eq!(a.faculty_id, "F1");
    assert_eq!(a.room_id, "R1");
    assert_eq!(a.group_id, "G1");
}

#[test]
fn second_subject_fails_when_only_cell_is_taken() {
    let set = EntitySet::new()
        .with_faculty(Faculty::new("F1").with_name("Prof").with_slot(TIME_SLOTS[0]))
        .with_subject(subject("S1", "CS101", 1, "F1"))
        .with_subject(subject("S2", "CS102", 1, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));

    let err = SimpleScheduler::new()
        .schedule(&set, &monday_only())
        .unwrap_err();

    assert_eq!(
        err,
        ScheduleError::Unsatisfiable {
            subject_code: "CS102".into()
        }
    );
}

#[test]
fn shared_subject_is_fulfilled_once_across_groups() {
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_subject(subject("S1", "CS101", 5, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"))
        .with_group(Group::new("G2").with_name("CSE-B"));

    let t = SimpleScheduler::new()
        .schedule(&set, &GridShape::standard())
        .unwrap();

    assert_eq!(t.assignments_for_group("G1").len(), 5);
    assert!(t.assignments_for_group("G2").is_empty());
    assert_eq!(t.assignments_for_subject("S1").len(), 5);
}

#[test]
fn shared_subject_per_group_mode() {
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_subject(subject("S1", "CS101", 5, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"))
        .with_group(Group::new("G2").with_name("CSE-B"));

    let t = SimpleScheduler::new()
        .with_fulfillment(FulfillmentMode::PerGroup)
        .schedule(&set, &GridShape::standard())
        .unwrap();

    assert_eq!(t.assignments_for_group("G1").len(), 5);
    assert_eq!(t.assignments_for_group("G2").len(), 5);
    let stats = TimetableStats::calculate(&t);
    assert!(stats.within_caps(7, 5));
}

#[test]
fn faculty_daily_cap_blocks_fifth_hour_on_single_day() {
    // Four usable periods on the only day: the fifth hour has nowhere to go.
    let set = EntitySet::new()
        .with_faculty(
            Faculty::new("F1")
                .with_name("Prof F1")
                .with_slots(TIME_SLOTS[..4].iter().copied()),
        )
        .with_subject(subject("S1", "CS101", 5, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));

    let err = SimpleScheduler::new()
        .schedule(&set, &monday_only())
        .unwrap_err();

    assert_eq!(err.subject_code(), "CS101");
    assert!(matches!(err, ScheduleError::Unsatisfiable { .. }));
}

#[test]
fn faculty_teaches_five_sessions_on_single_day() {
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_subject(subject("S1", "CS101", 5, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));

    let t = SimpleScheduler::new()
        .schedule(&set, &monday_only())
        .unwrap();
    let slots: Vec<usize> = t.iter().map(|(_, s, _)| s).collect();
    assert_eq!(slots, vec![0, 1, 2, 3, 4]);

    // A sixth hour exceeds the faculty's daily allowance.
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_subject(subject("S1", "CS101", 6, "F1"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));
    assert!(SimpleScheduler::new().schedule(&set, &monday_only()).is_err());
}

#[test]
fn failure_names_first_unsatisfiable_subject() {
    // CS101 fits; CS102's faculty has no slot in the grid at all.
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_faculty(Faculty::new("F2").with_name("Prof F2").with_slot("19:00-20:00"))
        .with_subject(subject("S1", "CS101", 2, "F1"))
        .with_subject(subject("S2", "CS102", 1, "F2"))
        .with_room(room())
        .with_group(Group::new("G1").with_name("CSE-A"));

    let err = SimpleScheduler::new()
        .schedule(&set, &GridShape::standard())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not schedule all required hours for CS102 given current constraints"
    );
}

#[test]
fn realistic_week_respects_caps() {
    let set = EntitySet::new()
        .with_faculty(faculty_all_slots("F1"))
        .with_faculty(Faculty::new("F2").with_name("Prof F2").with_slots(TIME_SLOTS[..5].iter().copied()))
        .with_faculty(Faculty::new("F3").with_name("Prof F3").with_slots(TIME_SLOTS[4..].iter().copied()))
        .with_subject(subject("S1", "CS101", 4, "F1"))
        .with_subject(subject("S2", "MA101", 3, "F2"))
        .with_subject(subject("S3", "PH101", 3, "F3"))
        .with_subject(subject("S4", "EE101", 2, "F1"))
        .with_room(room())
        .with_room(Room::new("R2").with_number("102").with_capacity(80))
        .with_group(Group::new("G1").with_name("CSE-A"))
        .with_group(Group::new("G2").with_name("CSE-B"));

    let shape = GridShape::standard();
    assert!(validate_input(&set, &shape).is_ok());

    let t = SimpleScheduler::new()
        .with_fulfillment(FulfillmentMode::PerGroup)
        .schedule(&set, &shape)
        .unwrap();

    let stats = TimetableStats::calculate(&t);
    assert_eq!(stats.filled_cells, 24);
    assert_eq!(stats.subject_hours("S1"), 8);
    assert!(stats.within_caps(7, 5));

    for (_, slot, a) in t.iter() {
        let faculty = set.faculty(&a.faculty_id).unwrap();
        assert!(faculty.is_available_for(TIME_SLOTS[slot]));
        assert_eq!(a.room_id, "R1");
    }
    assert_eq!(t.days(), DAYS.len());
}

#[test]
fn stored_record_schedules() {
    let json = r#"{
        "faculties": [{"id": "1", "name": "Dr. Rao", "availableSlots": ["8:35-9:25", "9:30-10:20"]}],
        "subjects": [{"id": "2", "code": "CS101", "name": "Programming", "weeklyHours": 3, "assignedFaculty": "1"}],
        "rooms": [{"id": "3", "number": "101", "capacity": 40}],
        "groups": [{"id": "4", "name": "CSE-A"}]
    }"#;
    let set = EntitySet::from_json(json).unwrap();

    let t = SimpleScheduler::new()
        .schedule(&set, &GridShape::standard())
        .unwrap();
    let cells: Vec<(usize, usize)> = t.iter().map(|(d, s, _)| (d, s)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);
}
