// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change-log persistence.
//!
//! The log is append-only; this module exposes insert and nothing else.

use diesel::prelude::*;
use tracing::debug;
use turnero_audit::ShiftChangeLogEntry;

use crate::data_models::{format_date, format_timestamp};
use crate::diesel_schema::shift_change_log;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Appends one change-log entry and returns its id.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn append_change_log_entry(
    conn: &mut SqliteConnection,
    entry: &ShiftChangeLogEntry,
) -> Result<i64, PersistenceError> {
    let changed_at: String = format_timestamp(entry.changed_at)?;

    diesel::insert_into(shift_change_log::table)
        .values((
            shift_change_log::employee_id.eq(entry.employee_id),
            shift_change_log::shift_assignment_id.eq(entry.shift_assignment_id),
            shift_change_log::changed_by.eq(&entry.changed_by),
            shift_change_log::old_shift.eq(&entry.old_shift),
            shift_change_log::new_shift.eq(&entry.new_shift),
            shift_change_log::comment.eq(&entry.comment),
            shift_change_log::shift_date.eq(format_date(entry.shift_date)),
            shift_change_log::changed_at.eq(changed_at),
        ))
        .execute(conn)?;

    let log_id: i64 = get_last_insert_rowid(conn)?;
    debug!(log_id, employee_id = entry.employee_id, "Appended change log entry");
    Ok(log_id)
}
