// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::date;
use turnero::AppliedBatch;
use turnero_domain::DayKey;

use crate::error::PersistenceError;
use crate::tests::{batch_for, july, seed_employee, test_actor, test_persistence};
use crate::{Persistence, ShiftAssignment};

#[test]
fn creates_assignment_for_empty_cell() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );

    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("batch should apply");

    assert_eq!(applied.applied_count, 1);
    assert!(applied.skipped.is_empty());

    let assignment: ShiftAssignment = persistence
        .assignment_for(employee_id, date!(2025 - 07 - 10))
        .expect("query should succeed")
        .expect("assignment should exist");
    assert_eq!(assignment.shift_code.value(), "M");

    let log = persistence.change_log(10).expect("log query should succeed");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].old_shift, "");
    assert_eq!(log[0].new_shift, "M");
    assert_eq!(log[0].comment, "created via platform");
    assert_eq!(log[0].changed_by, "supervisor-1");
    assert_eq!(log[0].shift_assignment_id, Some(assignment.shift_assignment_id));
}

#[test]
fn updates_existing_assignment() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let create = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    persistence
        .process_batch(&create, &test_actor())
        .expect("creation should apply");

    let update = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "T".to_string())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&update, &test_actor())
        .expect("update should apply");
    assert_eq!(applied.applied_count, 1);

    let assignment: ShiftAssignment = persistence
        .assignment_for(employee_id, date!(2025 - 07 - 10))
        .expect("query should succeed")
        .expect("assignment should exist");
    assert_eq!(assignment.shift_code.value(), "T");

    let log = persistence.change_log(10).expect("log query should succeed");
    assert_eq!(log.len(), 2);
    // Newest first.
    assert_eq!(log[0].old_shift, "M");
    assert_eq!(log[0].new_shift, "T");
    assert_eq!(log[0].comment, "modified via platform");
}

#[test]
fn blank_value_deletes_assignment() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let create = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    persistence
        .process_batch(&create, &test_actor())
        .expect("creation should apply");

    let clear = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "  ".to_string())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&clear, &test_actor())
        .expect("deletion should apply");
    assert_eq!(applied.applied_count, 1);

    assert!(
        persistence
            .assignment_for(employee_id, date!(2025 - 07 - 10))
            .expect("query should succeed")
            .is_none()
    );

    let log = persistence.change_log(10).expect("log query should succeed");
    assert_eq!(log[0].old_shift, "M");
    assert_eq!(log[0].new_shift, "");
    assert_eq!(log[0].comment, "deleted via platform");
    assert_eq!(log[0].shift_assignment_id, None);
}

#[test]
fn equal_code_is_noop_and_logs_nothing() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let create = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    persistence
        .process_batch(&create, &test_actor())
        .expect("creation should apply");

    // Lowercase input normalizes to the stored code.
    let resubmit = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "m".to_string())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&resubmit, &test_actor())
        .expect("noop batch should succeed");

    assert_eq!(applied.applied_count, 0);
    assert!(applied.employees.is_empty());
    let log = persistence.change_log(10).expect("log query should succeed");
    assert_eq!(log.len(), 1);
}

#[test]
fn blank_value_on_empty_cell_is_noop() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), String::new())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("noop batch should succeed");

    assert_eq!(applied.applied_count, 0);
    assert!(
        persistence
            .change_log(10)
            .expect("log query should succeed")
            .is_empty()
    );
}

#[test]
fn identical_resubmission_is_idempotent() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![
            (DayKey::DayOfMonth(10), "M".to_string()),
            (DayKey::DayOfMonth(11), "N".to_string()),
        ],
    );

    let first: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("first submission should apply");
    assert_eq!(first.applied_count, 2);

    let second: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("resubmission should succeed");
    assert_eq!(second.applied_count, 0);

    let log = persistence.change_log(10).expect("log query should succeed");
    assert_eq!(log.len(), 2);
}

#[test]
fn unknown_employee_is_skipped_not_fatal() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let mut batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    batch.entries.push(turnero::BatchEntry {
        employee_id: None,
        rut: "99.999.999-9".to_string(),
        nombre: "Fantasma".to_string(),
        turnos: vec![(DayKey::DayOfMonth(10), "T".to_string())],
    });

    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("batch should apply despite the unknown employee");

    assert_eq!(applied.applied_count, 1);
    assert_eq!(applied.skipped.len(), 1);
    assert!(applied.skipped[0].contains("Fantasma"));
}

#[test]
fn falls_back_to_rut_when_id_is_missing() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        None,
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("batch should apply via RUT lookup");

    assert_eq!(applied.applied_count, 1);
    assert!(
        persistence
            .assignment_for(employee_id, date!(2025 - 07 - 10))
            .expect("query should succeed")
            .is_some()
    );
}

#[test]
fn invalid_code_rolls_back_whole_batch() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);
    let other_id: i64 = seed_employee(&mut persistence, "22.222.222-2", "Bruno Díaz", 1);

    let mut batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![(DayKey::DayOfMonth(10), "M".to_string())],
    );
    batch.entries.push(turnero::BatchEntry {
        employee_id: Some(other_id),
        rut: "22.222.222-2".to_string(),
        nombre: "Bruno Díaz".to_string(),
        turnos: vec![(DayKey::DayOfMonth(11), "@@".to_string())],
    });

    let result = persistence.process_batch(&batch, &test_actor());
    assert!(matches!(result, Err(PersistenceError::InvalidBatchEntry(_))));

    // The valid first entry must not have been persisted.
    assert!(
        persistence
            .assignment_for(employee_id, date!(2025 - 07 - 10))
            .expect("query should succeed")
            .is_none()
    );
    assert!(
        persistence
            .change_log(10)
            .expect("log query should succeed")
            .is_empty()
    );
}

#[test]
fn multi_month_batch_applies_full_dates_atomically() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        None,
        vec![
            (DayKey::Date(date!(2025 - 07 - 31)), "N".to_string()),
            (DayKey::Date(date!(2025 - 08 - 01)), "M".to_string()),
        ],
    );

    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("multi-month batch should apply");
    assert_eq!(applied.applied_count, 2);

    assert!(
        persistence
            .assignment_for(employee_id, date!(2025 - 07 - 31))
            .expect("query should succeed")
            .is_some()
    );
    assert!(
        persistence
            .assignment_for(employee_id, date!(2025 - 08 - 01))
            .expect("query should succeed")
            .is_some()
    );
}

#[test]
fn bare_day_without_anchor_month_is_skipped() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        None,
        vec![(DayKey::DayOfMonth(5), "M".to_string())],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("batch should succeed with the cell skipped");

    assert_eq!(applied.applied_count, 0);
    assert_eq!(applied.skipped.len(), 1);
}

#[test]
fn groups_applied_changes_per_employee() {
    let mut persistence: Persistence = test_persistence();
    let employee_id: i64 = seed_employee(&mut persistence, "11.111.111-1", "Ana Soto", 1);

    let batch = batch_for(
        Some(employee_id),
        "11.111.111-1",
        "Ana Soto",
        Some(july()),
        vec![
            (DayKey::DayOfMonth(10), "M".to_string()),
            (DayKey::DayOfMonth(11), "LM".to_string()),
        ],
    );
    let applied: AppliedBatch = persistence
        .process_batch(&batch, &test_actor())
        .expect("batch should apply");

    assert_eq!(applied.employees.len(), 1);
    assert_eq!(applied.employees[0].changes.len(), 2);
    assert_eq!(applied.employees[0].changes[0].old_label, "Sin Turno");
    assert_eq!(applied.employees[0].changes[0].new_label, "Mañana");
    assert_eq!(applied.employees[0].changes[1].new_label, "Licencia Médica");
}
