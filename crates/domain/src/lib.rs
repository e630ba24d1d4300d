// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod error;
mod occupancy;
mod room;
mod validation;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use booking::Booking;
pub use error::DomainError;
pub use occupancy::{available_rooms, total_occupancy_percentage};
pub use room::{Room, RoomTerms};

// Re-export validation rules for callers that pre-check form input
pub use validation::{
    validate_booking_discount, validate_email, validate_guest_name, validate_rate,
    validate_room_discount, validate_room_name, validate_stay_dates,
};
