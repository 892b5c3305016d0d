// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::Date;
use turnero_domain::Employee;

use crate::data_models::{EmployeeRow, ShiftAssignment, ShiftAssignmentRow, format_date};
use crate::diesel_schema::{employees, shift_assignments};
use crate::error::PersistenceError;

/// Loads the assignment for one `(employee, date)` cell, if any.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn assignment_for(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
) -> Result<Option<ShiftAssignment>, PersistenceError> {
    let row: Option<ShiftAssignmentRow> = shift_assignments::table
        .filter(shift_assignments::employee_id.eq(employee_id))
        .filter(shift_assignments::shift_date.eq(format_date(date)))
        .select(ShiftAssignmentRow::as_select())
        .first(conn)
        .optional()?;
    row.map(ShiftAssignment::try_from).transpose()
}

/// Loads every assignment for one role within one calendar month,
/// joined with the assigned employee.
///
/// Dates are stored as `YYYY-MM-DD` text, so a month is one `LIKE`
/// prefix match.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn assignments_for_month(
    conn: &mut SqliteConnection,
    rol_id: i64,
    year: i32,
    month: u8,
) -> Result<Vec<(Employee, ShiftAssignment)>, PersistenceError> {
    let prefix: String = format!("{year:04}-{month:02}-%");
    let rows: Vec<(EmployeeRow, ShiftAssignmentRow)> = shift_assignments::table
        .inner_join(employees::table)
        .filter(employees::rol_id.eq(rol_id))
        .filter(shift_assignments::shift_date.like(prefix))
        .order((employees::full_name.asc(), shift_assignments::shift_date.asc()))
        .select((EmployeeRow::as_select(), ShiftAssignmentRow::as_select()))
        .load(conn)?;

    rows.into_iter()
        .map(|(employee, assignment)| {
            Ok((Employee::from(employee), ShiftAssignment::try_from(assignment)?))
        })
        .collect()
}
