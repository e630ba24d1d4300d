// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
///
/// Every variant is a construction-time rejection: a failed `Room` or
/// `Booking` constructor yields no object. Query operations never produce
/// these errors; they fall back to defensive defaults instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Room name is missing or blank.
    InvalidName,
    /// Room rate is not a finite number greater than zero.
    InvalidRate {
        /// The rejected rate value.
        rate: f64,
    },
    /// Room or booking discount is below zero.
    NegativeDiscount {
        /// The rejected discount value.
        discount: f64,
    },
    /// Room discount exceeds 100 percent.
    ExcessiveDiscount {
        /// The rejected discount value.
        discount: f64,
    },
    /// Booking guest name is missing or blank.
    EmptyName,
    /// Booking guest name contains a digit.
    NameContainsNumbers(String),
    /// Booking guest name contains a character that is neither a letter
    /// nor whitespace.
    NameInvalidCharacters(String),
    /// Booking email does not have the shape `local@domain.tld`.
    InvalidEmail(String),
    /// Booking check-in and check-out fall on the same day.
    SameDayStayNotAllowed(NaiveDate),
    /// Booking check-in falls after check-out.
    ReversedDateRange {
        /// The rejected check-in date.
        check_in: NaiveDate,
        /// The rejected check-out date.
        check_out: NaiveDate,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => {
                write!(f, "Invalid name: please enter an existing room type")
            }
            Self::InvalidRate { rate } => {
                write!(f, "Rate must be a valid number greater than 0, got {rate}")
            }
            Self::NegativeDiscount { discount } => {
                write!(f, "Negative discounts are not possible, got {discount}")
            }
            Self::ExcessiveDiscount { discount } => {
                write!(f, "Discount can't exceed 100%, got {discount}")
            }
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameContainsNumbers(name) => {
                write!(f, "Name must not contain numbers: '{name}'")
            }
            Self::NameInvalidCharacters(name) => {
                write!(f, "Name contains invalid characters: '{name}'")
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::SameDayStayNotAllowed(date) => {
                write!(
                    f,
                    "Check-in and check-out dates must be different, both are {date}"
                )
            }
            Self::ReversedDateRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-in date {check_in} must be before check-out date {check_out}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
