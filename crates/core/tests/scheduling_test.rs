use chrono::{NaiveTime, Utc};
use classboard_core::errors::BoardError;
use classboard_core::models::schedule::{CreateScheduleEntryRequest, ScheduleEntry, Weekday};
use classboard_core::scheduling::{check_candidate, overlaps, validate_entries};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn entry(day: Weekday, start: NaiveTime, end: NaiveTime) -> ScheduleEntry {
    ScheduleEntry {
        id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        day,
        start_time: start,
        end_time: end,
        created_at: Utc::now(),
    }
}

fn request(day: Weekday, start: NaiveTime, end: NaiveTime) -> CreateScheduleEntryRequest {
    CreateScheduleEntryRequest {
        day,
        start_time: start,
        end_time: end,
    }
}

#[test]
fn test_empty_set_accepts_any_valid_candidate() {
    let result = check_candidate(&[], Weekday::Monday, time(9, 0), time(10, 0));
    assert!(result.is_ok());
}

#[test]
fn test_touching_boundary_is_not_a_conflict() {
    let existing = vec![entry(Weekday::Monday, time(9, 0), time(10, 0))];

    let result = check_candidate(&existing, Weekday::Monday, time(10, 0), time(11, 0));
    assert!(result.is_ok());

    let result = check_candidate(&existing, Weekday::Monday, time(8, 0), time(9, 0));
    assert!(result.is_ok());
}

#[test]
fn test_partial_overlap_is_a_conflict() {
    let existing = vec![entry(Weekday::Monday, time(9, 0), time(10, 0))];

    let err = check_candidate(&existing, Weekday::Monday, time(9, 30), time(10, 30))
        .expect_err("overlapping candidate");

    match err {
        BoardError::ScheduleConflict { id, day, start, end } => {
            assert_eq!(id, Some(existing[0].id));
            assert_eq!(day, Weekday::Monday);
            assert_eq!(start, time(9, 0));
            assert_eq!(end, time(10, 0));
        }
        other => panic!("expected ScheduleConflict, got {other:?}"),
    }
}

#[test]
fn test_other_day_never_conflicts() {
    let existing = vec![entry(Weekday::Monday, time(9, 0), time(10, 0))];

    let result = check_candidate(&existing, Weekday::Tuesday, time(9, 30), time(10, 30));
    assert!(result.is_ok());
}

#[rstest]
#[case(time(10, 0), time(9, 0))]
#[case(time(10, 0), time(10, 0))]
fn test_inverted_or_empty_range_is_rejected(#[case] start: NaiveTime, #[case] end: NaiveTime) {
    let err = check_candidate(&[], Weekday::Monday, start, end).expect_err("invalid range");

    match err {
        BoardError::InvalidTimeRange {
            start: reported_start,
            end: reported_end,
        } => {
            assert_eq!(reported_start, start);
            assert_eq!(reported_end, end);
        }
        other => panic!("expected InvalidTimeRange, got {other:?}"),
    }
}

#[test]
fn test_containment_both_directions_is_a_conflict() {
    let existing = vec![entry(Weekday::Friday, time(9, 0), time(12, 0))];

    // Candidate inside the existing block
    assert!(check_candidate(&existing, Weekday::Friday, time(10, 0), time(11, 0)).is_err());

    // Candidate surrounding the existing block
    assert!(check_candidate(&existing, Weekday::Friday, time(8, 0), time(13, 0)).is_err());
}

#[test]
fn test_identical_range_is_a_conflict() {
    let existing = vec![entry(Weekday::Wednesday, time(14, 0), time(15, 30))];

    assert!(check_candidate(&existing, Weekday::Wednesday, time(14, 0), time(15, 30)).is_err());
}

#[test]
fn test_multi_entry_day_gap_is_accepted() {
    let existing = vec![
        entry(Weekday::Monday, time(9, 0), time(10, 0)),
        entry(Weekday::Monday, time(11, 0), time(12, 0)),
    ];

    assert!(check_candidate(&existing, Weekday::Monday, time(10, 0), time(11, 0)).is_ok());
    assert!(check_candidate(&existing, Weekday::Monday, time(9, 30), time(11, 30)).is_err());
}

#[test]
fn test_verdict_ignores_set_ordering_and_repeats() {
    let a = entry(Weekday::Monday, time(9, 0), time(10, 0));
    let b = entry(Weekday::Monday, time(11, 0), time(12, 0));
    let forward = vec![a.clone(), b.clone()];
    let backward = vec![b, a];

    for _ in 0..2 {
        assert!(check_candidate(&forward, Weekday::Monday, time(10, 0), time(11, 0)).is_ok());
        assert!(check_candidate(&backward, Weekday::Monday, time(10, 0), time(11, 0)).is_ok());
        assert!(check_candidate(&forward, Weekday::Monday, time(9, 30), time(10, 30)).is_err());
        assert!(check_candidate(&backward, Weekday::Monday, time(9, 30), time(10, 30)).is_err());
    }
}

#[rstest]
#[case(time(9, 0), time(10, 0), time(10, 0), time(11, 0), false)]
#[case(time(9, 0), time(10, 0), time(9, 30), time(10, 30), true)]
#[case(time(9, 0), time(12, 0), time(10, 0), time(11, 0), true)]
#[case(time(9, 0), time(10, 0), time(8, 0), time(9, 0), false)]
#[case(time(9, 0), time(10, 0), time(9, 0), time(10, 0), true)]
fn test_half_open_overlap_rule(
    #[case] s1: NaiveTime,
    #[case] e1: NaiveTime,
    #[case] s2: NaiveTime,
    #[case] e2: NaiveTime,
    #[case] expected: bool,
) {
    assert_eq!(overlaps(s1, e1, s2, e2), expected);
    // Overlap is symmetric
    assert_eq!(overlaps(s2, e2, s1, e1), expected);
}

#[test]
fn test_replacement_set_without_overlaps_is_accepted() {
    let entries = vec![
        request(Weekday::Monday, time(9, 0), time(10, 0)),
        request(Weekday::Monday, time(10, 0), time(11, 0)),
        request(Weekday::Tuesday, time(9, 30), time(10, 30)),
    ];

    assert!(validate_entries(&entries).is_ok());
}

#[test]
fn test_replacement_set_with_clashing_pair_is_rejected() {
    let entries = vec![
        request(Weekday::Monday, time(9, 0), time(10, 0)),
        request(Weekday::Tuesday, time(9, 0), time(10, 0)),
        request(Weekday::Monday, time(9, 30), time(10, 30)),
    ];

    let err = validate_entries(&entries).expect_err("clashing pair");
    match err {
        BoardError::ScheduleConflict { id, day, .. } => {
            assert_eq!(id, None);
            assert_eq!(day, Weekday::Monday);
        }
        other => panic!("expected ScheduleConflict, got {other:?}"),
    }
}

#[test]
fn test_replacement_set_with_invalid_range_is_rejected() {
    let entries = vec![
        request(Weekday::Monday, time(9, 0), time(10, 0)),
        request(Weekday::Thursday, time(16, 0), time(15, 0)),
    ];

    assert!(matches!(
        validate_entries(&entries),
        Err(BoardError::InvalidTimeRange { .. })
    ));
}

#[test]
fn test_empty_replacement_set_is_accepted() {
    assert!(validate_entries(&[]).is_ok());
}
