// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and conversions between stored and domain types.
//!
//! Dates are stored as `YYYY-MM-DD` text; timestamps as RFC 3339 text.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use turnero_audit::ShiftChangeLogEntry;
use turnero_domain::{Employee, ShiftCode};

use crate::diesel_schema::{employees, shift_assignments, shift_change_log};
use crate::error::PersistenceError;

/// Formats a date for storage.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Parses a stored date.
///
/// # Errors
///
/// Returns a reconstruction error if the stored text is not a valid
/// `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<Date, PersistenceError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format)
        .map_err(|e| PersistenceError::ReconstructionError(format!("invalid date '{raw}': {e}")))
}

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns a reconstruction error if the timestamp cannot be formatted.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("invalid timestamp: {e}")))
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns a reconstruction error if the stored text is not RFC 3339.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!("invalid timestamp '{raw}': {e}"))
    })
}

/// A persisted shift assignment.
///
/// At most one row exists per `(employee_id, shift_date)`; the absence
/// of a row means "no shift assigned".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAssignment {
    /// The row identifier.
    pub shift_assignment_id: i64,
    /// The assigned employee.
    pub employee_id: i64,
    /// The calendar date of the shift.
    pub shift_date: Date,
    /// The assigned shift code.
    pub shift_code: ShiftCode,
    /// Free-text comment from the batch that last wrote this row.
    pub comments: Option<String>,
}

#[derive(diesel::Queryable, diesel::Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub rut: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub rol_id: i64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            rut: row.rut,
            full_name: row.full_name,
            phone: row.phone,
            rol_id: row.rol_id,
        }
    }
}

#[derive(diesel::Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow<'a> {
    pub rut: &'a str,
    pub full_name: &'a str,
    pub phone: Option<&'a str>,
    pub rol_id: i64,
}

#[derive(diesel::Queryable, diesel::Selectable)]
#[diesel(table_name = shift_assignments)]
pub struct ShiftAssignmentRow {
    pub shift_assignment_id: i64,
    pub employee_id: i64,
    pub shift_date: String,
    pub shift_code: String,
    pub comments: Option<String>,
}

impl TryFrom<ShiftAssignmentRow> for ShiftAssignment {
    type Error = PersistenceError;

    fn try_from(row: ShiftAssignmentRow) -> Result<Self, Self::Error> {
        let shift_date: Date = parse_date(&row.shift_date)?;
        let shift_code: ShiftCode = ShiftCode::new(&row.shift_code).map_err(|e| {
            PersistenceError::ReconstructionError(format!(
                "invalid stored shift code '{}': {e}",
                row.shift_code
            ))
        })?;
        Ok(Self {
            shift_assignment_id: row.shift_assignment_id,
            employee_id: row.employee_id,
            shift_date,
            shift_code,
            comments: row.comments,
        })
    }
}

#[derive(diesel::Queryable, diesel::Selectable)]
#[diesel(table_name = shift_change_log)]
pub struct ShiftChangeLogRow {
    pub log_id: i64,
    pub employee_id: i64,
    pub shift_assignment_id: Option<i64>,
    pub changed_by: String,
    pub old_shift: String,
    pub new_shift: String,
    pub comment: String,
    pub shift_date: String,
    pub changed_at: String,
}

impl TryFrom<ShiftChangeLogRow> for ShiftChangeLogEntry {
    type Error = PersistenceError;

    fn try_from(row: ShiftChangeLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: row.employee_id,
            shift_assignment_id: row.shift_assignment_id,
            changed_by: row.changed_by,
            old_shift: row.old_shift,
            new_shift: row.new_shift,
            comment: row.comment,
            shift_date: parse_date(&row.shift_date)?,
            changed_at: parse_timestamp(&row.changed_at)?,
        })
    }
}
