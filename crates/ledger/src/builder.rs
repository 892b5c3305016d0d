// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::LedgerError;
use crate::ledger::ChangeLedger;
use crate::payload::{BatchPayload, EmployeePayload};
use crate::record::ChangeRecord;

/// Compresses the active ledger into the wire payload.
///
/// The entire active set travels in one request; the client never streams
/// partial batches. The ledger itself is left untouched. It is cleared
/// only after the server confirms success, so a failed submission leaves
/// every record available for inspection and undo.
///
/// # Errors
///
/// Returns `LedgerError::NoPendingChanges` when no active record exists;
/// this is rejected locally, before any network call.
pub fn build_payload(
    ledger: &ChangeLedger,
    comentario: &str,
    recipients: Option<Vec<i64>>,
) -> Result<BatchPayload, LedgerError> {
    let active: Vec<&ChangeRecord> = ledger.active_changes();
    if active.is_empty() {
        return Err(LedgerError::NoPendingChanges);
    }

    let multi_month: bool = ledger.is_multi_month();

    let mut cambios: BTreeMap<String, EmployeePayload> = BTreeMap::new();
    for record in &active {
        let entry: &mut EmployeePayload = cambios
            .entry(record.employee_key())
            .or_insert_with(|| EmployeePayload {
                rut: record.rut.clone(),
                nombre: record.employee_name.clone(),
                employee_id: record.employee_id,
                turnos: BTreeMap::new(),
            });
        entry
            .turnos
            .insert(record.day.wire_key(), record.new_value.clone());
    }

    // Multi-month batches rely on per-entry full dates instead of a
    // single anchor month.
    let (mes, ano): (Option<u8>, Option<i32>) = if multi_month {
        (None, None)
    } else {
        ledger
            .anchor()
            .map_or((None, None), |anchor| {
                (Some(anchor.month_number()), Some(anchor.year()))
            })
    };

    debug!(
        employees = cambios.len(),
        changes = active.len(),
        multi_month,
        "Built batch payload"
    );

    Ok(BatchPayload {
        cambios,
        mes,
        ano,
        employee_rol_id: ledger.rol_id(),
        comentario: comentario.to_string(),
        multi_month,
        whatsapp_recipients: recipients,
    })
}
