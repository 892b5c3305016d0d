// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::{debug, warn};
use turnero_domain::DayKey;

use crate::ledger::ChangeLedger;
use crate::record::ChangeRecord;
use crate::summary::PendingChangeSummary;

/// Narrow capability for writing a value back into a grid cell.
///
/// The coordinator never reaches into the grid directly; the hosting
/// page injects this capability. Implementations match rows by employee
/// id first and fall back to the display name for rows that have no
/// persisted identity yet. Returns `false` when no row matches.
pub trait GridPort {
    /// Writes `value` into the cell at (`employee`, `day`).
    fn update_cell(
        &mut self,
        employee_id: Option<i64>,
        employee_name: &str,
        day: &DayKey,
        value: &str,
    ) -> bool;
}

/// The outcome of one undo operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The record was reverted; carries its id.
    Reverted(String),
    /// No active record exists to undo.
    NothingToUndo,
    /// The targeted record is already undone.
    AlreadyUndone(String),
    /// No record with the targeted id exists.
    NotFound(String),
    /// The record's grid row is gone; nothing was changed.
    RowMissing(String),
}

/// Reverts edits and keeps the pending summary consistent.
///
/// Both the keyboard shortcut and the history panel funnel into these
/// two synchronous operations, so there is no race between them.
pub struct UndoCoordinator<'a, G: GridPort> {
    ledger: &'a mut ChangeLedger,
    summary: &'a mut PendingChangeSummary,
    grid: &'a mut G,
}

impl<'a, G: GridPort> UndoCoordinator<'a, G> {
    /// Creates a coordinator over the session's ledger, summary, and
    /// grid capability.
    pub fn new(
        ledger: &'a mut ChangeLedger,
        summary: &'a mut PendingChangeSummary,
        grid: &'a mut G,
    ) -> Self {
        Self {
            ledger,
            summary,
            grid,
        }
    }

    /// Undoes the chronologically last active edit.
    pub fn undo_last(&mut self) -> UndoOutcome {
        let Some(target) = self
            .ledger
            .active_changes()
            .last()
            .map(|record| (*record).clone())
        else {
            debug!("Nothing to undo");
            return UndoOutcome::NothingToUndo;
        };
        self.revert(&target)
    }

    /// Undoes an arbitrary edit by record id.
    ///
    /// Supports the change-history panel, where any past edit can be
    /// reverted, not just the latest.
    pub fn undo_specific(&mut self, id: &str) -> UndoOutcome {
        let Some(record) = self.ledger.find(id) else {
            warn!(record_id = id, "Undo target does not exist");
            return UndoOutcome::NotFound(id.to_string());
        };
        if record.undone {
            debug!(record_id = id, "Undo target already undone");
            return UndoOutcome::AlreadyUndone(id.to_string());
        }
        let target: ChangeRecord = record.clone();
        self.revert(&target)
    }

    /// Reverts one record: grid cell back to `old_value`, record marked
    /// undone, summary rebuilt from the surviving active set.
    fn revert(&mut self, target: &ChangeRecord) -> UndoOutcome {
        let row_found: bool = self.grid.update_cell(
            target.employee_id,
            &target.employee_name,
            &target.day,
            &target.old_value,
        );
        if !row_found {
            warn!(
                record_id = %target.id,
                employee = %target.employee_name,
                "Undo target row is not in the live grid; leaving ledger untouched"
            );
            return UndoOutcome::RowMissing(target.id.clone());
        }

        self.ledger.mark_undone(&target.id);
        // Full rebuild, never a single-key patch: the employee may have
        // other active edits that must survive.
        *self.summary = PendingChangeSummary::rebuild(&self.ledger.active_changes());

        UndoOutcome::Reverted(target.id.clone())
    }
}
