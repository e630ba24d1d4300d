// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Booking, Room, available_rooms, total_occupancy_percentage};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn book(room: &mut Room, guest: &str, check_in: NaiveDate, check_out: NaiveDate) {
    let booking = Booking::new(
        String::from(guest),
        String::from("guest@test.com"),
        check_in,
        check_out,
        0.0,
        room.terms(),
    )
    .unwrap();
    room.push_booking(booking);
}

fn fleet() -> Vec<Room> {
    let mut suite = Room::new(String::from("Suite"), 45_000.0, 10.0).unwrap();
    let mut double_bed = Room::new(String::from("Double Bed"), 35_000.0, 20.0).unwrap();
    let single = Room::new(String::from("Single"), 30_000.0, 5.0).unwrap();

    book(&mut suite, "Eva Sevillano", date(2025, 3, 6), date(2025, 3, 8));
    book(
        &mut double_bed,
        "Kutxi Romero",
        date(2025, 3, 7),
        date(2025, 3, 9),
    );

    vec![suite, double_bed, single]
}

fn names<'a>(rooms: &[&'a Room]) -> Vec<&'a str> {
    rooms.iter().map(|room| room.name()).collect()
}

#[test]
fn test_available_rooms_excludes_overlapping_bookings() {
    let rooms = fleet();
    let available = available_rooms(&rooms, date(2025, 3, 6), date(2025, 3, 10));
    assert_eq!(names(&available), vec!["Single"]);
}

#[test]
fn test_available_rooms_includes_rooms_without_bookings() {
    let rooms = vec![Room::new(String::from("Single"), 30_000.0, 5.0).unwrap()];
    let available = available_rooms(&rooms, date(2025, 3, 1), date(2025, 3, 31));
    assert_eq!(available.len(), 1);
}

#[test]
fn test_available_rooms_boundary_touch_makes_room_unavailable() {
    let mut room = Room::new(String::from("Suite"), 45_000.0, 10.0).unwrap();
    book(
        &mut room,
        "Eva Sevillano",
        date(2025, 3, 6),
        date(2025, 3, 8),
    );
    let rooms = vec![room];

    // Query starting on the check-out day intersects the stay
    let available = available_rooms(&rooms, date(2025, 3, 8), date(2025, 3, 12));
    assert!(available.is_empty());

    // Query ending on the check-in day intersects the stay
    let available = available_rooms(&rooms, date(2025, 3, 1), date(2025, 3, 6));
    assert!(available.is_empty());
}

#[test]
fn test_available_rooms_all_free_outside_booked_spans() {
    let rooms = fleet();
    let available = available_rooms(&rooms, date(2025, 3, 20), date(2025, 3, 25));
    assert_eq!(names(&available), vec!["Suite", "Double Bed", "Single"]);
}

#[test]
fn test_available_rooms_empty_input() {
    let available = available_rooms(&[], date(2025, 3, 6), date(2025, 3, 10));
    assert!(available.is_empty());
}

#[test]
fn test_total_occupancy_percentage_across_fleet() {
    let mut rooms = fleet();
    book(
        &mut rooms[2],
        "Robe Iniesta",
        date(2025, 3, 6),
        date(2025, 3, 9),
    );

    // 3 + 3 + 4 occupied days over 3 rooms x 4 days, rounded
    let total = total_occupancy_percentage(&rooms, date(2025, 3, 6), date(2025, 3, 9));
    assert_eq!(total, 83);
}

#[test]
fn test_total_occupancy_percentage_zero_without_rooms() {
    assert_eq!(
        total_occupancy_percentage(&[], date(2025, 3, 6), date(2025, 3, 10)),
        0
    );
}

#[test]
fn test_total_occupancy_percentage_zero_for_equal_dates() {
    let rooms = fleet();
    assert_eq!(
        total_occupancy_percentage(&rooms, date(2025, 3, 6), date(2025, 3, 6)),
        0
    );
}

#[test]
fn test_total_occupancy_percentage_zero_for_reversed_range() {
    let rooms = fleet();
    assert_eq!(
        total_occupancy_percentage(&rooms, date(2025, 3, 10), date(2025, 3, 6)),
        0
    );
}

#[test]
fn test_total_occupancy_percentage_zero_with_empty_ledgers() {
    let rooms = vec![
        Room::new(String::from("Suite"), 45_000.0, 10.0).unwrap(),
        Room::new(String::from("Single"), 30_000.0, 5.0).unwrap(),
    ];
    assert_eq!(
        total_occupancy_percentage(&rooms, date(2025, 3, 6), date(2025, 3, 10)),
        0
    );
}

#[test]
fn test_total_occupancy_percentage_rounds_to_nearest() {
    let mut room = Room::new(String::from("Suite"), 45_000.0, 10.0).unwrap();
    book(
        &mut room,
        "Eva Sevillano",
        date(2025, 3, 1),
        date(2025, 3, 2),
    );
    let rooms = vec![room];

    // 2 occupied days over 3 -> 66.67, rounded up
    let total = total_occupancy_percentage(&rooms, date(2025, 3, 1), date(2025, 3, 3));
    assert_eq!(total, 67);
}

#[test]
fn test_total_occupancy_percentage_can_exceed_100() {
    // Two full-range bookings on one room double-count; intended behavior
    let mut room = Room::new(String::from("Suite"), 45_000.0, 10.0).unwrap();
    book(
        &mut room,
        "Eva Sevillano",
        date(2025, 3, 6),
        date(2025, 3, 9),
    );
    book(
        &mut room,
        "Kutxi Romero",
        date(2025, 3, 6),
        date(2025, 3, 9),
    );
    let rooms = vec![room];

    let total = total_occupancy_percentage(&rooms, date(2025, 3, 6), date(2025, 3, 9));
    assert_eq!(total, 200);
}
