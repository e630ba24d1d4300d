// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::Booking;
use crate::error::DomainError;
use crate::occupancy::{inclusive_days, overlapping_days};
use crate::validation::{validate_rate, validate_room_discount, validate_room_name};
use chrono::NaiveDate;
use serde::Serialize;
use std::rc::Rc;

/// The immutable commercial terms of a room: display name, nightly rate,
/// and standing discount percentage.
///
/// Terms are shared behind an `Rc` between a [`Room`] and every [`Booking`]
/// taken against it, so a booking always prices itself from the same values
/// the room advertises. Terms carry no setters; once validated they never
/// change.
#[derive(Debug, PartialEq, Serialize)]
pub struct RoomTerms {
    /// The display name, stored verbatim (untrimmed).
    name: String,
    /// The nightly rate. Always finite and greater than zero.
    rate: f64,
    /// The standing discount percentage, in `[0, 100]`.
    discount: f64,
}

impl RoomTerms {
    /// Creates validated `RoomTerms`.
    ///
    /// Usually reached through [`Room::new`]; constructing terms directly is
    /// useful when several rooms share one rate plan.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is empty or only whitespace (`DomainError::InvalidName`)
    /// - `rate` is NaN, infinite, zero, or negative (`DomainError::InvalidRate`)
    /// - `discount` is negative (`DomainError::NegativeDiscount`)
    /// - `discount` exceeds 100 (`DomainError::ExcessiveDiscount`)
    pub fn new(name: String, rate: f64, discount: f64) -> Result<Self, DomainError> {
        validate_room_name(&name)?;
        validate_rate(rate)?;
        validate_room_discount(discount)?;

        Ok(Self {
            name,
            rate,
            discount,
        })
    }

    /// Returns the room's display name, exactly as supplied at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nightly rate.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the standing discount percentage.
    #[must_use]
    pub const fn discount(&self) -> f64 {
        self.discount
    }
}

/// A bookable room: validated commercial terms plus the ledger of bookings
/// taken against it.
///
/// The ledger is append-only and unguarded: nothing prevents two bookings
/// from overlapping, so a room can be double-booked. Occupancy queries sum
/// bookings independently and double-count shared days accordingly.
#[derive(Debug, PartialEq, Serialize)]
pub struct Room {
    terms: Rc<RoomTerms>,
    bookings: Vec<Booking>,
}

impl Room {
    /// Creates a new `Room` with an empty booking ledger.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name, stored verbatim
    /// * `rate` - The nightly rate
    /// * `discount` - The standing discount percentage
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is empty or only whitespace (`DomainError::InvalidName`)
    /// - `rate` is NaN, infinite, zero, or negative (`DomainError::InvalidRate`)
    /// - `discount` is negative (`DomainError::NegativeDiscount`)
    /// - `discount` exceeds 100 (`DomainError::ExcessiveDiscount`)
    pub fn new(name: String, rate: f64, discount: f64) -> Result<Self, DomainError> {
        Ok(Self {
            terms: Rc::new(RoomTerms::new(name, rate, discount)?),
            bookings: Vec::new(),
        })
    }

    /// Creates a `Room` from existing shared terms, with an empty booking
    /// ledger.
    #[must_use]
    pub const fn with_terms(terms: Rc<RoomTerms>) -> Self {
        Self {
            terms,
            bookings: Vec::new(),
        }
    }

    /// Returns a shared handle to the room's terms, for constructing
    /// bookings against this room.
    #[must_use]
    pub fn terms(&self) -> Rc<RoomTerms> {
        Rc::clone(&self.terms)
    }

    /// Returns the room's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.terms.name()
    }

    /// Returns the nightly rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.terms.rate()
    }

    /// Returns the standing discount percentage.
    #[must_use]
    pub fn discount(&self) -> f64 {
        self.terms.discount()
    }

    /// Appends a booking to the ledger.
    ///
    /// No availability check is performed: a booking that overlaps an
    /// existing stay is accepted. Callers wanting to refuse double-bookings
    /// must consult [`Room::is_occupied`] or
    /// [`available_rooms`](crate::available_rooms) first.
    pub fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Returns the bookings taken against this room, in append order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns whether any booking covers `date`.
    ///
    /// Both the check-in day and the check-out day count as occupied.
    #[must_use]
    pub fn is_occupied(&self, date: NaiveDate) -> bool {
        self.bookings.iter().any(|booking| booking.covers(date))
    }

    /// Returns the percentage of days in `[range_start, range_end]` covered
    /// by this room's bookings.
    ///
    /// Overlapping bookings double-count their shared days, so the raw sum
    /// can exceed the range length; the result is capped at 100 and not
    /// rounded. A reversed range yields `0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // day counts stay far below 2^52
    pub fn occupancy_percentage(&self, range_start: NaiveDate, range_end: NaiveDate) -> f64 {
        if range_start > range_end {
            return 0.0;
        }

        let total_days = inclusive_days(range_start, range_end);
        let occupied_days: i64 = self
            .bookings
            .iter()
            .map(|booking| {
                overlapping_days(
                    booking.check_in(),
                    booking.check_out(),
                    range_start,
                    range_end,
                )
            })
            .sum();

        (occupied_days as f64 / total_days as f64 * 100.0).min(100.0)
    }
}
