// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use turnero_domain::{DayKey, DomainError, RosterMonth};

use crate::error::CoreError;

/// All pending edits for one employee within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// The persisted employee identifier, when the grid row has one.
    pub employee_id: Option<i64>,
    /// The employee's RUT, used as a fallback identity.
    pub rut: String,
    /// The employee's display name.
    pub nombre: String,
    /// Edited cells: day coordinate to requested raw value. A blank
    /// value requests clearing the cell.
    pub turnos: Vec<(DayKey, String)>,
}

/// The complete set of active edits submitted together.
///
/// A batch is one atomic unit even when `multi_month` entries span two
/// calendar months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftBatch {
    /// Per-employee edits.
    pub entries: Vec<BatchEntry>,
    /// The anchor month for bare day numbers. `None` for multi-month
    /// batches, which address every cell by full date.
    pub month: Option<RosterMonth>,
    /// Free-text comment attached by the submitting supervisor.
    pub comentario: String,
    /// The roster (role) scope being edited.
    pub rol_id: i64,
    /// Whether entries use full-date addressing.
    pub multi_month: bool,
    /// Explicit stakeholder selection for notifications, when provided.
    pub recipient_selection: Option<Vec<i64>>,
}

impl ShiftBatch {
    /// Whether the batch carries no edits at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.turnos.is_empty())
    }
}

/// Resolves one edited cell's day coordinate to a concrete date.
///
/// Full dates are always valid. Bare day numbers need the batch's anchor
/// month; a bare day in a batch without one cannot be resolved.
///
/// # Errors
///
/// Returns an error if a bare day has no anchor month or does not exist
/// in the anchor month.
pub fn resolve_entry_date(month: Option<&RosterMonth>, day: &DayKey) -> Result<Date, CoreError> {
    match (month, day) {
        (_, DayKey::Date(date)) => Ok(*date),
        (Some(anchor), key) => Ok(anchor.resolve_date(key)?),
        (None, key) => Err(CoreError::DomainViolation(DomainError::MissingMonth {
            day: key.wire_key(),
        })),
    }
}
