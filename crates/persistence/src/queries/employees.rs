// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use turnero_domain::Employee;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Looks up one employee by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_employee(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Employee::from))
}

/// Looks up one employee by RUT.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_employee_by_rut(
    conn: &mut SqliteConnection,
    rut: &str,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .filter(employees::rut.eq(rut))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Employee::from))
}

/// Lists every employee assigned to one roster role.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn employees_for_rol(
    conn: &mut SqliteConnection,
    rol_id: i64,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::rol_id.eq(rol_id))
        .order(employees::full_name.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Employee::from).collect())
}
