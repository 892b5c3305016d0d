// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transactional batch processor.
//!
//! One database transaction per submitted batch: every assignment
//! mutation and every change-log row either commits together or rolls
//! back together, even when the batch spans several employees or two
//! calendar months. Notification work happens strictly after commit and
//! never inside this module.

use diesel::prelude::*;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};
use turnero::{AppliedBatch, AppliedChange, BatchEntry, MutationPlan, ShiftBatch};
use turnero::{plan_mutation, resolve_entry_date};
use turnero_audit::{Actor, ShiftChangeLogEntry, ShiftMutationKind};
use turnero_domain::{Employee, shift_label};

use crate::error::PersistenceError;
use crate::mutations::assignments::{
    delete_assignment, insert_assignment, update_assignment_code,
};
use crate::mutations::audit::append_change_log_entry;
use crate::queries::assignments::assignment_for;
use crate::queries::employees::{find_employee, find_employee_by_rut};

/// Applies one batch inside a single transaction.
///
/// Unresolvable employees and days are soft failures: the entry is
/// skipped with a warning and the batch continues. Every other error is
/// fatal to the whole batch and rolls back all of it.
///
/// # Errors
///
/// Returns an error if any mutation, log append, or in-transaction
/// validation fails; in that case nothing from the batch is persisted.
pub fn process_batch(
    conn: &mut SqliteConnection,
    batch: &ShiftBatch,
    actor: &Actor,
) -> Result<AppliedBatch, PersistenceError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let applied: AppliedBatch = conn.transaction::<AppliedBatch, PersistenceError, _>(|conn| {
        let mut applied: AppliedBatch = AppliedBatch::new();

        for entry in &batch.entries {
            let Some(employee) = resolve_employee(conn, entry)? else {
                warn!(
                    employee = %entry.nombre,
                    rut = %entry.rut,
                    "Employee not found; skipping entry"
                );
                applied.push_skipped(format!(
                    "employee '{}' ({}) not found",
                    entry.nombre, entry.rut
                ));
                continue;
            };

            for (day, requested) in &entry.turnos {
                let date: Date = match resolve_entry_date(batch.month.as_ref(), day) {
                    Ok(date) => date,
                    Err(err) => {
                        warn!(
                            employee = %employee.full_name,
                            day = %day,
                            error = %err,
                            "Unresolvable day; skipping cell"
                        );
                        applied.push_skipped(format!(
                            "'{}' day {day}: {err}",
                            employee.full_name
                        ));
                        continue;
                    }
                };

                apply_cell(conn, &mut applied, &employee, date, requested, actor, now, batch)?;
            }
        }

        Ok(applied)
    })?;

    info!(
        applied = applied.applied_count,
        employees = applied.employees.len(),
        skipped = applied.skipped.len(),
        "Processed shift batch"
    );

    Ok(applied)
}

/// Resolves a batch entry's employee: persisted id first, RUT fallback.
fn resolve_employee(
    conn: &mut SqliteConnection,
    entry: &BatchEntry,
) -> Result<Option<Employee>, PersistenceError> {
    if let Some(id) = entry.employee_id
        && let Some(employee) = find_employee(conn, id)?
    {
        return Ok(Some(employee));
    }
    find_employee_by_rut(conn, &entry.rut)
}

/// Plans and applies the mutation for one cell.
///
/// A no-op plan applies nothing and logs nothing, which is what makes
/// identical resubmission produce no extra audit rows.
#[allow(clippy::too_many_arguments)]
fn apply_cell(
    conn: &mut SqliteConnection,
    applied: &mut AppliedBatch,
    employee: &Employee,
    date: Date,
    requested: &str,
    actor: &Actor,
    now: OffsetDateTime,
    batch: &ShiftBatch,
) -> Result<(), PersistenceError> {
    let current = assignment_for(conn, employee.employee_id, date)?;

    let plan: MutationPlan = plan_mutation(
        current.as_ref().map(|assignment| &assignment.shift_code),
        requested,
    )
    .map_err(|err| PersistenceError::InvalidBatchEntry(err.to_string()))?;

    match plan {
        MutationPlan::Noop => {}
        MutationPlan::Create { new_code } => {
            let assignment_id: i64 = insert_assignment(
                conn,
                employee.employee_id,
                date,
                &new_code,
                &batch.comentario,
            )?;
            let entry: ShiftChangeLogEntry = ShiftChangeLogEntry::for_mutation(
                ShiftMutationKind::Created,
                employee.employee_id,
                Some(assignment_id),
                &actor.id,
                "",
                new_code.value(),
                date,
                now,
            );
            append_change_log_entry(conn, &entry)?;
            applied.push_change(
                employee,
                AppliedChange {
                    shift_date: date,
                    old_label: shift_label(None),
                    new_label: new_code.label(),
                },
            );
        }
        MutationPlan::Update { old_code, new_code } => {
            // `current` is always present for an update plan.
            let Some(assignment) = current else {
                return Err(PersistenceError::ReconstructionError(
                    "update plan without a current assignment".to_string(),
                ));
            };
            update_assignment_code(
                conn,
                assignment.shift_assignment_id,
                &new_code,
                &batch.comentario,
            )?;
            let entry: ShiftChangeLogEntry = ShiftChangeLogEntry::for_mutation(
                ShiftMutationKind::Modified,
                employee.employee_id,
                Some(assignment.shift_assignment_id),
                &actor.id,
                old_code.value(),
                new_code.value(),
                date,
                now,
            );
            append_change_log_entry(conn, &entry)?;
            applied.push_change(
                employee,
                AppliedChange {
                    shift_date: date,
                    old_label: old_code.label(),
                    new_label: new_code.label(),
                },
            );
        }
        MutationPlan::Delete { old_code } => {
            let Some(assignment) = current else {
                return Err(PersistenceError::ReconstructionError(
                    "delete plan without a current assignment".to_string(),
                ));
            };
            delete_assignment(conn, assignment.shift_assignment_id)?;
            let entry: ShiftChangeLogEntry = ShiftChangeLogEntry::for_mutation(
                ShiftMutationKind::Deleted,
                employee.employee_id,
                None,
                &actor.id,
                old_code.value(),
                "",
                date,
                now,
            );
            append_change_log_entry(conn, &entry)?;
            applied.push_change(
                employee,
                AppliedChange {
                    shift_date: date,
                    old_label: old_code.label(),
                    new_label: shift_label(None),
                },
            );
        }
    }

    Ok(())
}
