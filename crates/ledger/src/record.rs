// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use turnero_domain::DayKey;

/// One speculative edit to a grid cell.
///
/// Records are append-only. The only mutation a record ever undergoes is
/// having its `undone` flag flipped by the undo coordinator; it is
/// discarded only when the whole ledger is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Unique identifier for this record within the process run.
    pub id: String,
    /// Monotonic insertion order within the ledger.
    pub seq: u64,
    /// The persisted employee identifier, when the grid row has one.
    pub employee_id: Option<i64>,
    /// The employee's RUT.
    pub rut: String,
    /// The employee's display name, used as a fallback identity for rows
    /// not yet persisted.
    pub employee_name: String,
    /// The edited cell's day coordinate.
    pub day: DayKey,
    /// The cell value before the edit.
    pub old_value: String,
    /// The cell value after the edit.
    pub new_value: String,
    /// When the edit was recorded.
    pub recorded_at: OffsetDateTime,
    /// Whether this record has been reverted.
    pub undone: bool,
}

impl ChangeRecord {
    /// The key this record's employee is grouped under in summaries and
    /// payloads: the persisted id when present, the RUT otherwise.
    #[must_use]
    pub fn employee_key(&self) -> String {
        self.employee_id
            .map_or_else(|| self.rut.clone(), |id| id.to_string())
    }
}
