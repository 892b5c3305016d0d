// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit types for persisted shift mutations.
//!
//! The audit log is append-only and independent of the client-side edit
//! ledger: it records state transitions that were actually persisted, not
//! raw edits. A cell edited twice before saving produces one assignment
//! mutation and therefore one log entry.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use time::{Date, OffsetDateTime};

#[cfg(test)]
mod tests;


/// Represents the entity performing a persisted mutation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Actor {
    /// The acting user's identifier, as provided by the identity layer.
    pub id: String,
    /// A human-readable name for display in the log viewer.
    pub display_name: String,
}

impl Actor {
    /// Creates a new actor.
    #[must_use]
    pub const fn new(id: String, display_name: String) -> Self {
        Self { id, display_name }
    }
}

/// The kind of effective mutation applied to a shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftMutationKind {
    /// A new assignment row was created.
    Created,
    /// An existing assignment's code was changed.
    Modified,
    /// An existing assignment row was deleted.
    Deleted,
}

impl ShiftMutationKind {
    /// The fixed comment recorded with every log entry of this kind.
    #[must_use]
    pub const fn platform_comment(self) -> &'static str {
        match self {
            Self::Created => "created via platform",
            Self::Modified => "modified via platform",
            Self::Deleted => "deleted via platform",
        }
    }
}

/// An immutable record of one persisted shift mutation.
///
/// Entries are never updated or deleted. `shift_assignment_id` is `None`
/// for deletions, where the referenced row no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftChangeLogEntry {
    /// The affected employee.
    pub employee_id: i64,
    /// The assignment row this entry refers to, when it still exists.
    pub shift_assignment_id: Option<i64>,
    /// Identifier of the user who submitted the batch.
    pub changed_by: String,
    /// The previous shift code; empty for creations.
    pub old_shift: String,
    /// The new shift code; empty for deletions.
    pub new_shift: String,
    /// The fixed platform comment for the mutation kind.
    pub comment: String,
    /// The calendar date of the affected cell.
    pub shift_date: Date,
    /// When the mutation was persisted.
    pub changed_at: OffsetDateTime,
}

impl ShiftChangeLogEntry {
    /// Builds a log entry for one effective mutation.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn for_mutation(
        kind: ShiftMutationKind,
        employee_id: i64,
        shift_assignment_id: Option<i64>,
        changed_by: &str,
        old_shift: &str,
        new_shift: &str,
        shift_date: Date,
        changed_at: OffsetDateTime,
    ) -> Self {
        Self {
            employee_id,
            shift_assignment_id,
            changed_by: changed_by.to_string(),
            old_shift: old_shift.to_string(),
            new_shift: new_shift.to_string(),
            comment: kind.platform_comment().to_string(),
            shift_date,
            changed_at,
        }
    }
}
