// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::data_models::NewEmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts an employee into the directory and returns the assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g. duplicate RUT).
pub fn insert_employee(
    conn: &mut SqliteConnection,
    rut: &str,
    full_name: &str,
    phone: Option<&str>,
    rol_id: i64,
) -> Result<i64, PersistenceError> {
    let row: NewEmployeeRow<'_> = NewEmployeeRow {
        rut,
        full_name,
        phone,
        rol_id,
    };

    diesel::insert_into(employees::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
