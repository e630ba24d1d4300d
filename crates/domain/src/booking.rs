// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::occupancy::inclusive_days;
use crate::room::RoomTerms;
use crate::validation::{
    validate_booking_discount, validate_email, validate_guest_name, validate_stay_dates,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::rc::Rc;

/// A validated reservation against a single room.
///
/// A booking holds a shared handle to the room's terms rather than a copy,
/// so [`Booking::fee`] always prices from the terms the room itself carries.
/// Constructing a booking does not register it anywhere; callers append it
/// to the owning [`Room`](crate::Room)'s ledger themselves.
///
/// All fields are immutable after construction.
#[derive(Debug, PartialEq, Serialize)]
pub struct Booking {
    /// The guest name, letters and whitespace only.
    name: String,
    /// The guest email address.
    email: String,
    /// First day of the stay.
    check_in: NaiveDate,
    /// Last day of the stay. Strictly after `check_in`.
    check_out: NaiveDate,
    /// Discount percentage granted on top of the room's own discount.
    discount: f64,
    /// The terms of the room this booking reserves.
    room: Rc<RoomTerms>,
}

impl Booking {
    /// Creates a new `Booking`.
    ///
    /// Validation is atomic and ordered; the first failing rule wins and no
    /// partial booking is ever produced.
    ///
    /// # Arguments
    ///
    /// * `name` - The guest name
    /// * `email` - The guest email address
    /// * `check_in` - First day of the stay
    /// * `check_out` - Last day of the stay
    /// * `discount` - Discount percentage on top of the room's discount
    /// * `room` - Shared handle to the reserved room's terms
    ///
    /// # Errors
    ///
    /// Returns an error if, in this order:
    /// - `name` is empty or only whitespace (`DomainError::EmptyName`)
    /// - `name` contains a digit (`DomainError::NameContainsNumbers`)
    /// - `name` contains any other non-letter, non-whitespace character
    ///   (`DomainError::NameInvalidCharacters`)
    /// - `email` is malformed or empty (`DomainError::InvalidEmail`)
    /// - `check_in` equals `check_out` (`DomainError::SameDayStayNotAllowed`)
    /// - `check_in` falls after `check_out` (`DomainError::ReversedDateRange`)
    /// - `discount` is negative (`DomainError::NegativeDiscount`)
    pub fn new(
        name: String,
        email: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        discount: f64,
        room: Rc<RoomTerms>,
    ) -> Result<Self, DomainError> {
        validate_guest_name(&name)?;
        validate_email(&email)?;
        validate_stay_dates(check_in, check_out)?;
        validate_booking_discount(discount)?;

        Ok(Self {
            name,
            email,
            check_in,
            check_out,
            discount,
            room,
        })
    }

    /// Returns the guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the guest email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the first day of the stay.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the last day of the stay.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the booking's own discount percentage.
    #[must_use]
    pub const fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the terms of the room this booking reserves.
    #[must_use]
    pub fn room(&self) -> &RoomTerms {
        &self.room
    }

    /// Returns whether `date` falls within the stay, inclusive at both ends.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.check_in && date <= self.check_out
    }

    /// Returns whether the stay intersects `[range_start, range_end]`,
    /// inclusive at every boundary.
    #[must_use]
    pub fn overlaps(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        self.check_in <= range_end && self.check_out >= range_start
    }

    /// Returns the total price of the stay.
    ///
    /// Both boundary days are charged. The room discount and the booking
    /// discount add together and the combined discount is capped at 100%,
    /// so the fee is never negative and reaches zero at full discount.
    /// Computed on access from the shared room terms, never cached.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // stay lengths stay far below 2^52
    pub fn fee(&self) -> f64 {
        let days = inclusive_days(self.check_in, self.check_out) as f64;
        let base_fee = days * self.room.rate();
        let total_discount = (self.room.discount() + self.discount).min(100.0) / 100.0;
        base_fee * (1.0 - total_discount)
    }
}
