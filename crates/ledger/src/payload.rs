// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire contract for batch submission.
//!
//! Shared between the editing client and the server boundary so the two
//! can never disagree on field names or shapes.

use std::collections::BTreeMap;

/// Pending edits for one employee on the wire.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeePayload {
    /// The employee's RUT.
    pub rut: String,
    /// The employee's display name.
    pub nombre: String,
    /// The persisted employee identifier, when known.
    pub employee_id: Option<i64>,
    /// Edited cells: day key (bare day number or `YYYY-MM-DD`) to the
    /// requested shift code. Blank requests clearing the cell.
    pub turnos: BTreeMap<String, String>,
}

/// The batch submission body.
///
/// Single-month batches carry `mes`/`año` and bare day keys; multi-month
/// batches omit both and address every cell by full date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchPayload {
    /// Pending edits keyed by employee id (or RUT for unpersisted rows).
    pub cambios: BTreeMap<String, EmployeePayload>,
    /// Target month, 1-based. `None` in multi-month mode.
    pub mes: Option<u8>,
    /// Target year. `None` in multi-month mode.
    #[serde(rename = "año")]
    pub ano: Option<i32>,
    /// The roster (role) scope being edited.
    pub employee_rol_id: i64,
    /// Free-text comment from the submitting supervisor.
    pub comentario: String,
    /// Whether entries use full-date addressing.
    pub multi_month: bool,
    /// Explicit stakeholder selection for notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_recipients: Option<Vec<i64>>,
}
