// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::format_description;
use time::{Date, Month};

use crate::error::DomainError;
use crate::validation::validate_shift_code;
use crate::vocabulary::shift_label;

/// A validated, normalized shift code.
///
/// Codes are trimmed and upper-cased at construction so comparisons are
/// always canonical (`"m"`, `" M "` and `"M"` are the same code).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftCode(String);

impl ShiftCode {
    /// Creates a shift code from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed code is empty, longer than four
    /// characters, or contains non-alphanumeric characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized: String = raw.trim().to_uppercase();
        validate_shift_code(&normalized)?;
        Ok(Self(normalized))
    }

    /// The canonical code string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The display label per the shift vocabulary.
    #[must_use]
    pub fn label(&self) -> String {
        shift_label(Some(&self.0))
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid cell's day coordinate.
///
/// Within a single roster month, cells are addressed by a bare day of
/// month. Cross-month batches address cells by full calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayKey {
    /// A day number within the batch's anchor month.
    DayOfMonth(u8),
    /// A full calendar date, used by multi-month batches.
    Date(Date),
}

impl DayKey {
    /// Parses a wire day key: either a bare day number (`"7"`) or a full
    /// `YYYY-MM-DD` date (`"2025-07-10"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a day in `1..=31` nor a
    /// parseable calendar date.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if let Ok(day) = trimmed.parse::<u8>() {
            if (1..=31).contains(&day) {
                return Ok(Self::DayOfMonth(day));
            }
            return Err(DomainError::InvalidDay {
                value: trimmed.to_string(),
            });
        }

        let format = format_description!("[year]-[month]-[day]");
        Date::parse(trimmed, &format)
            .map(Self::Date)
            .map_err(|err| DomainError::DateParseError {
                date_string: trimmed.to_string(),
                error: err.to_string(),
            })
    }

    /// Whether this key is a full calendar date (multi-month addressing).
    #[must_use]
    pub const fn is_full_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// The wire representation of this key.
    #[must_use]
    pub fn wire_key(&self) -> String {
        match self {
            Self::DayOfMonth(day) => day.to_string(),
            Self::Date(date) => date.to_string(),
        }
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_key())
    }
}

/// The calendar month a single-month batch is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterMonth {
    year: i32,
    month: Month,
}

impl RosterMonth {
    /// Creates a roster month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let month: Month =
            Month::try_from(month).map_err(|_| DomainError::InvalidMonth { month })?;
        Ok(Self { year, month })
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The 1-based month number.
    #[must_use]
    pub fn month_number(&self) -> u8 {
        u8::from(self.month)
    }

    /// Resolves a day key to a concrete date within this month.
    ///
    /// Full dates pass through untouched; bare day numbers are combined
    /// with this month and year.
    ///
    /// # Errors
    ///
    /// Returns an error if a bare day number does not exist in this month
    /// (e.g. day 31 in April).
    pub fn resolve_date(&self, day: &DayKey) -> Result<Date, DomainError> {
        match day {
            DayKey::Date(date) => Ok(*date),
            DayKey::DayOfMonth(number) => {
                Date::from_calendar_date(self.year, self.month, *number).map_err(|_| {
                    DomainError::InvalidDayForMonth {
                        day: *number,
                        year: self.year,
                        month: u8::from(self.month),
                    }
                })
            }
        }
    }
}

impl std::fmt::Display for RosterMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, u8::from(self.month))
    }
}
