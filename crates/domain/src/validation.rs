// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// Local part, '@', then a domain with at least one dot. No whitespace or
// second '@' anywhere.
#[allow(clippy::unwrap_used)] // the pattern is a literal and compiles
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates a room's display name.
///
/// The name is stored verbatim elsewhere; this only checks that it contains
/// at least one non-whitespace character.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty or only whitespace.
pub fn validate_room_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName);
    }
    Ok(())
}

/// Validates a nightly rate.
///
/// # Errors
///
/// Returns `DomainError::InvalidRate` if the rate is NaN, infinite, zero,
/// or negative.
pub const fn validate_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(DomainError::InvalidRate { rate });
    }
    Ok(())
}

/// Validates a room's standing discount percentage.
///
/// # Errors
///
/// Returns an error if:
/// - The discount is negative (`DomainError::NegativeDiscount`)
/// - The discount exceeds 100 (`DomainError::ExcessiveDiscount`)
pub const fn validate_room_discount(discount: f64) -> Result<(), DomainError> {
    if discount < 0.0 {
        return Err(DomainError::NegativeDiscount { discount });
    }
    if discount > 100.0 {
        return Err(DomainError::ExcessiveDiscount { discount });
    }
    Ok(())
}

/// Validates a booking's own discount percentage.
///
/// Unlike a room discount, a booking discount has no upper bound of its own;
/// the combined discount is capped when the fee is computed.
///
/// # Errors
///
/// Returns `DomainError::NegativeDiscount` if the discount is negative.
pub const fn validate_booking_discount(discount: f64) -> Result<(), DomainError> {
    if discount < 0.0 {
        return Err(DomainError::NegativeDiscount { discount });
    }
    Ok(())
}

/// Validates a guest name.
///
/// Guest names consist of ASCII letters and whitespace only. The checks run
/// in a fixed order so each malformed input maps to one distinct error.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or only whitespace (`DomainError::EmptyName`)
/// - The name contains a digit (`DomainError::NameContainsNumbers`)
/// - The name contains any other non-letter, non-whitespace character
///   (`DomainError::NameInvalidCharacters`)
pub fn validate_guest_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(DomainError::NameContainsNumbers(name.to_owned()));
    }
    if name
        .chars()
        .any(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
    {
        return Err(DomainError::NameInvalidCharacters(name.to_owned()));
    }
    Ok(())
}

/// Validates a guest email address.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address does not have the
/// shape `local@domain.tld`. An empty string fails the same way.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::InvalidEmail(email.to_owned()));
    }
    Ok(())
}

/// Validates a stay's date pair.
///
/// Check-in must fall strictly before check-out. A same-day stay and a
/// reversed pair are distinct errors.
///
/// # Errors
///
/// Returns an error if:
/// - The dates are equal (`DomainError::SameDayStayNotAllowed`)
/// - Check-in falls after check-out (`DomainError::ReversedDateRange`)
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), DomainError> {
    if check_in == check_out {
        return Err(DomainError::SameDayStayNotAllowed(check_in));
    }
    if check_in > check_out {
        return Err(DomainError::ReversedDateRange {
            check_in,
            check_out,
        });
    }
    Ok(())
}
