// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::date;
use turnero_domain::Employee;

use crate::{AppliedBatch, AppliedChange};

fn test_employee(id: i64) -> Employee {
    Employee::new(
        id,
        format!("1.234.56{id}-0"),
        format!("Empleado {id} Prueba Soto"),
        None,
        1,
    )
}

fn change(day: u8) -> AppliedChange {
    AppliedChange {
        shift_date: date!(2025 - 07 - 01).replace_day(day).unwrap(),
        old_label: String::from("Sin Turno"),
        new_label: String::from("Mañana"),
    }
}

#[test]
fn test_changes_group_under_one_employee_bucket() {
    let mut applied: AppliedBatch = AppliedBatch::new();
    let employee: Employee = test_employee(1);

    applied.push_change(&employee, change(1));
    applied.push_change(&employee, change(2));

    assert_eq!(applied.employees.len(), 1);
    assert_eq!(applied.employees[0].changes.len(), 2);
    assert_eq!(applied.applied_count, 2);
}

#[test]
fn test_distinct_employees_get_distinct_buckets() {
    let mut applied: AppliedBatch = AppliedBatch::new();

    applied.push_change(&test_employee(1), change(1));
    applied.push_change(&test_employee(2), change(1));

    assert_eq!(applied.employees.len(), 2);
    assert_eq!(applied.applied_count, 2);
}

#[test]
fn test_skipped_entries_do_not_count_as_applied() {
    let mut applied: AppliedBatch = AppliedBatch::new();
    applied.push_skipped(String::from("employee '99' not found"));

    assert_eq!(applied.applied_count, 0);
    assert!(applied.employees.is_empty());
    assert_eq!(applied.skipped.len(), 1);
}
