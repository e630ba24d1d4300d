// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy arithmetic over inclusive calendar-day ranges.
//!
//! All ranges in this module are inclusive at both ends: a stay from the
//! 28th to the 31st occupies four days, and a query range of a single day
//! has length one.
//!
//! ## Invariants
//!
//! - Bookings are summed independently; overlapping bookings on the same
//!   room double-count their shared days
//! - Malformed inputs (reversed range, empty room list) yield `0` rather
//!   than an error
//!
//! ## Usage
//!
//! The per-room queries live on [`Room`]; this module holds the shared day
//! arithmetic and the fleet-wide queries that span several rooms.

use crate::room::Room;
use chrono::NaiveDate;

/// Number of calendar days in the inclusive range `[start, end]`.
///
/// Callers must ensure `start <= end`.
pub const fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}

/// Number of days the stay `[check_in, check_out]` spends inside the query
/// range `[range_start, range_end]`. Zero when the two ranges are disjoint.
pub fn overlapping_days(
    check_in: NaiveDate,
    check_out: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> i64 {
    let overlap_start = check_in.max(range_start);
    let overlap_end = check_out.min(range_end);
    if overlap_start <= overlap_end {
        inclusive_days(overlap_start, overlap_end)
    } else {
        0
    }
}

/// Returns the rooms with no booking intersecting `[range_start, range_end]`.
///
/// Input order is preserved. A room with an empty booking ledger is always
/// available; a booking touching the range at a single boundary day makes
/// its room unavailable.
#[must_use]
pub fn available_rooms(
    rooms: &[Room],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<&Room> {
    rooms
        .iter()
        .filter(|room| {
            !room
                .bookings()
                .iter()
                .any(|booking| booking.overlaps(range_start, range_end))
        })
        .collect()
}

/// Returns the occupancy of a whole room fleet over `[range_start, range_end]`
/// as a percentage rounded to the nearest integer.
///
/// Occupied days are summed across every booking of every room and divided
/// by `rooms.len() * range length`. Unlike [`Room::occupancy_percentage`],
/// the result is rounded but never capped: double-booked rooms can push the
/// figure past 100.
///
/// Returns `0` when `rooms` is empty or `range_end <= range_start`.
#[must_use]
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)] // day and room counts are small, and the rounded ratio is non-negative
pub fn total_occupancy_percentage(
    rooms: &[Room],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> u32 {
    if rooms.is_empty() || range_end <= range_start {
        return 0;
    }

    let total_days = inclusive_days(range_start, range_end);
    let occupied_days: i64 = rooms
        .iter()
        .flat_map(|room| room.bookings().iter())
        .map(|booking| {
            overlapping_days(
                booking.check_in(),
                booking.check_out(),
                range_start,
                range_end,
            )
        })
        .sum();

    let total_room_days = rooms.len() as i64 * total_days;
    (occupied_days as f64 / total_room_days as f64 * 100.0).round() as u32
}
