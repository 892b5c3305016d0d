// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use turnero_audit::ShiftChangeLogEntry;

use crate::data_models::ShiftChangeLogRow;
use crate::diesel_schema::shift_change_log;
use crate::error::PersistenceError;

/// Loads the most recent change-log entries, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn change_log(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<ShiftChangeLogEntry>, PersistenceError> {
    let rows: Vec<ShiftChangeLogRow> = shift_change_log::table
        .order(shift_change_log::log_id.desc())
        .limit(limit)
        .select(ShiftChangeLogRow::as_select())
        .load(conn)?;
    rows.into_iter().map(ShiftChangeLogEntry::try_from).collect()
}

/// Loads the most recent change-log entries for one employee, newest
/// first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn change_log_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    limit: i64,
) -> Result<Vec<ShiftChangeLogEntry>, PersistenceError> {
    let rows: Vec<ShiftChangeLogRow> = shift_change_log::table
        .filter(shift_change_log::employee_id.eq(employee_id))
        .order(shift_change_log::log_id.desc())
        .limit(limit)
        .select(ShiftChangeLogRow::as_select())
        .load(conn)?;
    rows.into_iter().map(ShiftChangeLogEntry::try_from).collect()
}
