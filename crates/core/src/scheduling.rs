//! # Schedule Overlap Checking
//!
//! Decides whether a proposed weekly time block can join a classroom's
//! schedule set. Blocks are half-open intervals `[start_time, end_time)`
//! on a weekday, so back-to-back bookings (one ending exactly when the
//! next starts) are never flagged.
//!
//! Two intervals `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`.
//! Entries on different days never interact. The functions here are pure
//! and total: the same inputs always produce the same verdict, and the
//! order of the existing set is irrelevant.

use chrono::NaiveTime;

use crate::errors::{BoardError, BoardResult};
use crate::models::schedule::{CreateScheduleEntryRequest, ScheduleEntry, Weekday};

/// Half-open interval overlap test.
pub fn overlaps(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Rejects a block whose start is not strictly before its end.
pub fn validate_range(start: NaiveTime, end: NaiveTime) -> BoardResult<()> {
    if start >= end {
        return Err(BoardError::InvalidTimeRange { start, end });
    }
    Ok(())
}

/// Checks a candidate block against a classroom's existing schedule set.
///
/// The caller is expected to pass the up-to-date set for the classroom
/// being edited; this function only judges the data it is given.
///
/// # Errors
///
/// * `BoardError::InvalidTimeRange` - the candidate's own range is inverted
///   or empty
/// * `BoardError::ScheduleConflict` - a same-day entry overlaps the
///   candidate; the error names the first conflicting entry so clients can
///   highlight it
pub fn check_candidate(
    existing: &[ScheduleEntry],
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
) -> BoardResult<()> {
    validate_range(start, end)?;

    if let Some(hit) = existing
        .iter()
        .filter(|e| e.day == day)
        .find(|e| overlaps(e.start_time, e.end_time, start, end))
    {
        return Err(BoardError::ScheduleConflict {
            id: Some(hit.id),
            day: hit.day,
            start: hit.start_time,
            end: hit.end_time,
        });
    }

    Ok(())
}

/// Validates a full replacement set, as submitted by the classroom editor.
///
/// Every entry must be a valid range, and no two same-day entries may
/// overlap each other. The reported conflict is the earlier entry of the
/// first clashing pair in submission order; it carries no id because none
/// of the entries is persisted yet.
pub fn validate_entries(entries: &[CreateScheduleEntryRequest]) -> BoardResult<()> {
    for entry in entries {
        validate_range(entry.start_time, entry.end_time)?;
    }

    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.day == b.day && overlaps(a.start_time, a.end_time, b.start_time, b.end_time) {
                return Err(BoardError::ScheduleConflict {
                    id: None,
                    day: a.day,
                    start: a.start_time,
                    end: a.end_time,
                });
            }
        }
    }

    Ok(())
}
