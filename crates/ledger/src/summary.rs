// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use turnero_domain::DayKey;

use crate::record::ChangeRecord;

/// Pending edits for one employee, as shown in the confirmation panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeSummary {
    /// The employee's RUT.
    pub rut: String,
    /// The employee's display name.
    pub nombre: String,
    /// Edited cells: day coordinate to pending new value.
    pub turnos: BTreeMap<DayKey, String>,
}

/// Derived view of the ledger's active records, grouped by employee.
///
/// This is a pure function of the active record set. It is rebuilt in
/// full after every undo rather than patched in place; an employee may
/// have several active edits on different days and the summary must
/// reflect exactly the surviving set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingChangeSummary {
    entries: BTreeMap<String, EmployeeSummary>,
}

impl PendingChangeSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Rebuilds the summary from the given active records.
    ///
    /// When the same employee/day pair appears more than once (a cell
    /// edited repeatedly), the latest record wins because records arrive
    /// in insertion order.
    #[must_use]
    pub fn rebuild(active: &[&ChangeRecord]) -> Self {
        let mut entries: BTreeMap<String, EmployeeSummary> = BTreeMap::new();
        for record in active {
            let entry: &mut EmployeeSummary = entries.entry(record.employee_key()).or_default();
            entry.rut = record.rut.clone();
            entry.nombre = record.employee_name.clone();
            entry.turnos.insert(record.day, record.new_value.clone());
        }
        Self { entries }
    }

    /// The per-employee entries, keyed by employee id or RUT.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, EmployeeSummary> {
        &self.entries
    }

    /// Whether the summary holds no pending edits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
