// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only API operations and employee registration.

use time::format_description::well_known::Rfc3339;
use turnero_audit::ShiftChangeLogEntry;
use turnero_persistence::Persistence;

use crate::error::ApiError;
use crate::request_response::{
    AuditTrailResponse, ChangeLogEntryInfo, GridCellInfo, MonthGridResponse,
    RegisterEmployeeRequest, RegisterEmployeeResponse,
};

/// Registers a new employee.
///
/// # Errors
///
/// Returns an error if the input is blank or the insert fails, for
/// example on a duplicate RUT.
pub fn register_employee(
    persistence: &mut Persistence,
    request: &RegisterEmployeeRequest,
) -> Result<RegisterEmployeeResponse, ApiError> {
    if request.rut.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: "rut".to_string(),
            message: "RUT must not be blank".to_string(),
        });
    }
    if request.full_name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: "full_name".to_string(),
            message: "full name must not be blank".to_string(),
        });
    }

    let employee_id: i64 = persistence.insert_employee(
        request.rut.trim(),
        request.full_name.trim(),
        request.phone.as_deref(),
        request.rol_id,
    )?;

    Ok(RegisterEmployeeResponse {
        employee_id,
        message: format!("Employee '{}' registered", request.full_name.trim()),
    })
}

/// Reads every persisted assignment for one role and month.
///
/// # Errors
///
/// Returns an error if the month is invalid or the query fails.
pub fn month_grid(
    persistence: &mut Persistence,
    rol_id: i64,
    year: i32,
    month: u8,
) -> Result<MonthGridResponse, ApiError> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::InvalidInput {
            field: "month".to_string(),
            message: format!("month {month} is out of range"),
        });
    }

    let cells: Vec<GridCellInfo> = persistence
        .assignments_for_month(rol_id, year, month)?
        .into_iter()
        .map(|(employee, assignment)| GridCellInfo {
            employee_id: employee.employee_id,
            employee_name: employee.full_name,
            shift_date: assignment.shift_date.to_string(),
            shift_code: assignment.shift_code.value().to_string(),
            shift_label: assignment.shift_code.label(),
        })
        .collect();

    Ok(MonthGridResponse {
        rol_id,
        year,
        month,
        cells,
    })
}

/// Reads the most recent change-log entries, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn audit_trail(persistence: &mut Persistence, limit: i64) -> Result<AuditTrailResponse, ApiError> {
    let entries: Vec<ShiftChangeLogEntry> = persistence.change_log(limit)?;
    Ok(AuditTrailResponse {
        entries: entries.iter().map(entry_info).collect(),
    })
}

/// Reads the most recent change-log entries for one employee, newest
/// first.
///
/// # Errors
///
/// Returns an error if the employee does not exist or the query fails.
pub fn audit_trail_for_employee(
    persistence: &mut Persistence,
    employee_id: i64,
    limit: i64,
) -> Result<AuditTrailResponse, ApiError> {
    if persistence.find_employee(employee_id)?.is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: "Employee".to_string(),
            message: format!("no employee with id {employee_id}"),
        });
    }

    let entries: Vec<ShiftChangeLogEntry> =
        persistence.change_log_for_employee(employee_id, limit)?;
    Ok(AuditTrailResponse {
        entries: entries.iter().map(entry_info).collect(),
    })
}

fn entry_info(entry: &ShiftChangeLogEntry) -> ChangeLogEntryInfo {
    ChangeLogEntryInfo {
        employee_id: entry.employee_id,
        changed_by: entry.changed_by.clone(),
        old_shift: entry.old_shift.clone(),
        new_shift: entry.new_shift.clone(),
        comment: entry.comment.clone(),
        shift_date: entry.shift_date.to_string(),
        changed_at: entry
            .changed_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| entry.changed_at.to_string()),
    }
}
