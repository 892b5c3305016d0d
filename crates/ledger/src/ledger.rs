// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use turnero_domain::{DayKey, RosterMonth};

use crate::record::ChangeRecord;

/// The outcome of recording one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The edit was appended; carries the new record's id.
    Recorded(String),
    /// The edit changed nothing and was not stored.
    NoOp,
}

/// Append-only, in-memory sequence of grid edits.
///
/// The ledger is scoped to one editing session over one roster grid. The
/// grid's month anchors bare day numbers; a record addressed by full date
/// marks the session as multi-month.
#[derive(Debug, Clone)]
pub struct ChangeLedger {
    grid_month: RosterMonth,
    rol_id: i64,
    records: Vec<ChangeRecord>,
    next_seq: u64,
    anchor: Option<RosterMonth>,
    pending_banner: bool,
}

impl ChangeLedger {
    /// Creates an empty ledger for a grid showing the given month of the
    /// given roster.
    #[must_use]
    pub const fn new(grid_month: RosterMonth, rol_id: i64) -> Self {
        Self {
            grid_month,
            rol_id,
            records: Vec::new(),
            next_seq: 0,
            anchor: None,
            pending_banner: false,
        }
    }

    /// The roster (role) scope this ledger edits.
    #[must_use]
    pub const fn rol_id(&self) -> i64 {
        self.rol_id
    }

    /// Records one cell edit.
    ///
    /// No-op edits (`old_value == new_value`) are rejected, not stored.
    /// The first stored record of a session marks the anchor month.
    pub fn record(
        &mut self,
        employee_id: Option<i64>,
        rut: &str,
        employee_name: &str,
        day: DayKey,
        old_value: &str,
        new_value: &str,
    ) -> RecordOutcome {
        if old_value == new_value {
            return RecordOutcome::NoOp;
        }

        let recorded_at: OffsetDateTime = OffsetDateTime::now_utc();
        let id: String = format!(
            "chg_{}_{}",
            recorded_at.unix_timestamp_nanos() / 1_000_000,
            rand::random::<u64>()
        );

        if self.anchor.is_none() {
            self.anchor = Some(self.grid_month);
        }
        self.pending_banner = true;

        let record: ChangeRecord = ChangeRecord {
            id: id.clone(),
            seq: self.next_seq,
            employee_id,
            rut: rut.to_string(),
            employee_name: employee_name.to_string(),
            day,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
            recorded_at,
            undone: false,
        };
        self.next_seq += 1;
        self.records.push(record);

        RecordOutcome::Recorded(id)
    }

    /// Active (non-undone) records in insertion order.
    #[must_use]
    pub fn active_changes(&self) -> Vec<&ChangeRecord> {
        self.records.iter().filter(|r| !r.undone).collect()
    }

    /// All records, including undone ones, for a change-history view.
    #[must_use]
    pub fn all_records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ChangeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Flips a record's `undone` flag. Clears the banner and anchor when
    /// the last active record goes away.
    pub(crate) fn mark_undone(&mut self, id: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.undone = true;
        }
        if self.active_changes().is_empty() {
            self.pending_banner = false;
            self.anchor = None;
        }
    }

    /// Whether any active edit is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_banner
    }

    /// The anchor month marked by the first edit of the session.
    #[must_use]
    pub const fn anchor(&self) -> Option<RosterMonth> {
        self.anchor
    }

    /// The month of the grid this ledger edits.
    #[must_use]
    pub const fn grid_month(&self) -> RosterMonth {
        self.grid_month
    }

    /// Whether any active record addresses a cell by full date.
    #[must_use]
    pub fn is_multi_month(&self) -> bool {
        self.active_changes().iter().any(|r| r.day.is_full_date())
    }

    /// Discards every record and the anchor. Called after a confirmed
    /// successful submission or an explicit "clear all".
    pub fn clear(&mut self) {
        self.records.clear();
        self.anchor = None;
        self.pending_banner = false;
    }
}
