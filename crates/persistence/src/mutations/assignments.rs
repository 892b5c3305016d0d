// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::Date;
use turnero_domain::ShiftCode;

use crate::data_models::format_date;
use crate::diesel_schema::shift_assignments;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new assignment row and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails (including a violation of the
/// one-row-per-cell unique constraint).
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
    code: &ShiftCode,
    comments: &str,
) -> Result<i64, PersistenceError> {
    let comments_value: Option<&str> = if comments.trim().is_empty() {
        None
    } else {
        Some(comments)
    };

    diesel::insert_into(shift_assignments::table)
        .values((
            shift_assignments::employee_id.eq(employee_id),
            shift_assignments::shift_date.eq(format_date(date)),
            shift_assignments::shift_code.eq(code.value()),
            shift_assignments::comments.eq(comments_value),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates an existing assignment's shift code.
///
/// # Errors
///
/// Returns an error if the update fails or no row matches.
pub fn update_assignment_code(
    conn: &mut SqliteConnection,
    shift_assignment_id: i64,
    code: &ShiftCode,
    comments: &str,
) -> Result<(), PersistenceError> {
    let comments_value: Option<&str> = if comments.trim().is_empty() {
        None
    } else {
        Some(comments)
    };

    let updated: usize = diesel::update(
        shift_assignments::table
            .filter(shift_assignments::shift_assignment_id.eq(shift_assignment_id)),
    )
    .set((
        shift_assignments::shift_code.eq(code.value()),
        shift_assignments::comments.eq(comments_value),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "shift assignment {shift_assignment_id}"
        )));
    }
    Ok(())
}

/// Deletes an assignment row.
///
/// # Errors
///
/// Returns an error if the delete fails or no row matches.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    shift_assignment_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        shift_assignments::table
            .filter(shift_assignments::shift_assignment_id.eq(shift_assignment_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "shift assignment {shift_assignment_id}"
        )));
    }
    Ok(())
}
