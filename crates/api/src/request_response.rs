// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use turnero_ledger::BatchPayload;

/// API request to submit a batch of shift edits.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmitBatchRequest {
    /// Identifier of the submitting supervisor.
    pub actor_id: String,
    /// Display name of the submitting supervisor.
    pub actor_name: String,
    /// The wire payload built from the client-side change ledger.
    pub payload: BatchPayload,
}

/// API response for a processed batch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitBatchResponse {
    /// A success message.
    pub message: String,
    /// The number of mutations actually applied.
    pub applied_count: usize,
    /// Human-readable descriptions of skipped entries.
    pub skipped: Vec<String>,
    /// The number of notification messages dispatched after commit.
    pub notifications_sent: usize,
}

/// API request to register a new employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterEmployeeRequest {
    /// The employee's RUT.
    pub rut: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's phone number, if known.
    pub phone: Option<String>,
    /// The roster role the employee belongs to.
    pub rol_id: i64,
}

/// API response for a registered employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterEmployeeResponse {
    /// The assigned employee identifier.
    pub employee_id: i64,
    /// A success message.
    pub message: String,
}

/// One assignment cell in a month grid response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridCellInfo {
    /// The affected employee.
    pub employee_id: i64,
    /// The employee's full name.
    pub employee_name: String,
    /// The calendar date, as `YYYY-MM-DD`.
    pub shift_date: String,
    /// The stored shift code.
    pub shift_code: String,
    /// The human-readable label for the code.
    pub shift_label: String,
}

/// API response for a month grid read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthGridResponse {
    /// The roster role being read.
    pub rol_id: i64,
    /// The grid year.
    pub year: i32,
    /// The grid month, 1 through 12.
    pub month: u8,
    /// Every persisted assignment in the month, sorted by employee name
    /// then date.
    pub cells: Vec<GridCellInfo>,
}

/// One change-log entry in an audit trail response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeLogEntryInfo {
    /// The affected employee.
    pub employee_id: i64,
    /// Identifier of the user who submitted the batch.
    pub changed_by: String,
    /// The previous shift code; empty for creations.
    pub old_shift: String,
    /// The new shift code; empty for deletions.
    pub new_shift: String,
    /// The fixed platform comment for the mutation kind.
    pub comment: String,
    /// The calendar date of the affected cell, as `YYYY-MM-DD`.
    pub shift_date: String,
    /// When the mutation was persisted, as RFC 3339.
    pub changed_at: String,
}

/// API response for an audit trail read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditTrailResponse {
    /// Entries newest first.
    pub entries: Vec<ChangeLogEntryInfo>,
}
