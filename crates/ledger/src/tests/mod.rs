// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeMap;

use turnero_domain::{DayKey, RosterMonth};

use crate::undo::GridPort;
use crate::{ChangeLedger, RecordOutcome};


/// One row of the fake editing grid.
pub struct FakeRow {
    pub employee_id: Option<i64>,
    pub name: String,
    pub cells: BTreeMap<DayKey, String>,
}

/// In-memory stand-in for the hosting page's grid.
///
/// Matches rows by employee id when the record carries one, by display
/// name otherwise, mirroring the injected capability the real grid
/// provides.
#[derive(Default)]
pub struct FakeGrid {
    pub rows: Vec<FakeRow>,
}

impl FakeGrid {
    pub fn with_row(mut self, employee_id: Option<i64>, name: &str) -> Self {
        self.rows.push(FakeRow {
            employee_id,
            name: name.to_string(),
            cells: BTreeMap::new(),
        });
        self
    }

    pub fn cell(&self, name: &str, day: &DayKey) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .and_then(|row| row.cells.get(day).cloned())
    }

    pub fn set_cell(&mut self, name: &str, day: DayKey, value: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.name == name) {
            row.cells.insert(day, value.to_string());
        }
    }
}

impl GridPort for FakeGrid {
    fn update_cell(
        &mut self,
        employee_id: Option<i64>,
        employee_name: &str,
        day: &DayKey,
        value: &str,
    ) -> bool {
        let row = match employee_id {
            Some(id) => self.rows.iter_mut().find(|row| row.employee_id == Some(id)),
            None => self.rows.iter_mut().find(|row| row.name == employee_name),
        };
        match row {
            Some(row) => {
                row.cells.insert(*day, value.to_string());
                true
            }
            None => false,
        }
    }
}

/// A ledger for July 2025 on roster 1.
pub fn july_ledger() -> ChangeLedger {
    ChangeLedger::new(RosterMonth::new(2025, 7).unwrap(), 1)
}

/// Records an edit and asserts it was stored, returning the record id.
pub fn record_ok(
    ledger: &mut ChangeLedger,
    employee_id: Option<i64>,
    name: &str,
    day: DayKey,
    old: &str,
    new: &str,
) -> String {
    match ledger.record(employee_id, "11.111.111-1", name, day, old, new) {
        RecordOutcome::Recorded(id) => id,
        RecordOutcome::NoOp => panic!("edit unexpectedly rejected as no-op"),
    }
}
