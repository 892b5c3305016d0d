// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use turnero_domain::Employee;

/// One change the processor actually applied, rendered for humans.
///
/// Labels come from the shift vocabulary at the moment of application,
/// so the notification stage never re-derives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    /// The affected calendar date.
    pub shift_date: Date,
    /// Label of the previous state.
    pub old_label: String,
    /// Label of the new state.
    pub new_label: String,
}

/// All changes applied for one employee in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeChanges {
    /// The resolved employee.
    pub employee: Employee,
    /// Applied changes in processing order.
    pub changes: Vec<AppliedChange>,
}

/// The outcome of processing one batch.
///
/// Only employees with at least one applied (non-noop) change appear in
/// `employees`. `skipped` collects soft failures: entries whose employee
/// or date could not be resolved and were passed over without aborting
/// the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedBatch {
    /// Per-employee applied changes.
    pub employees: Vec<EmployeeChanges>,
    /// Total number of applied mutations across all employees.
    pub applied_count: usize,
    /// Human-readable descriptions of skipped entries.
    pub skipped: Vec<String>,
}

impl AppliedBatch {
    /// Creates an empty outcome.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
            applied_count: 0,
            skipped: Vec::new(),
        }
    }

    /// Records one applied change for an employee, creating the
    /// per-employee bucket on first use.
    pub fn push_change(&mut self, employee: &Employee, change: AppliedChange) {
        self.applied_count += 1;
        if let Some(existing) = self
            .employees
            .iter_mut()
            .find(|bucket| bucket.employee.employee_id == employee.employee_id)
        {
            existing.changes.push(change);
        } else {
            self.employees.push(EmployeeChanges {
                employee: employee.clone(),
                changes: vec![change],
            });
        }
    }

    /// Records a soft failure for one skipped entry.
    pub fn push_skipped(&mut self, reason: String) {
        self.skipped.push(reason);
    }
}
