// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shift code is empty, too long, or contains invalid characters.
    InvalidShiftCode(String),
    /// Day-of-month value is outside `1..=31`.
    InvalidDay {
        /// The invalid raw value.
        value: String,
    },
    /// Day number does not exist in the target month.
    InvalidDayForMonth {
        /// The day number.
        day: u8,
        /// The target year.
        year: i32,
        /// The target month (1-based).
        month: u8,
    },
    /// Month number is outside `1..=12`.
    InvalidMonth {
        /// The invalid month number.
        month: u8,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A bare day number was used without an anchor month.
    MissingMonth {
        /// The day key that could not be resolved.
        day: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShiftCode(code) => write!(f, "Invalid shift code: '{code}'"),
            Self::InvalidDay { value } => {
                write!(f, "Invalid day of month: '{value}'. Must be between 1 and 31")
            }
            Self::InvalidDayForMonth { day, year, month } => {
                write!(f, "Day {day} does not exist in {year}-{month:02}")
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::MissingMonth { day } => {
                write!(f, "Day '{day}' requires a target month, but none was provided")
            }
        }
    }
}

impl std::error::Error for DomainError {}
