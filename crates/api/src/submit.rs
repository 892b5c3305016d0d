// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch submission: payload validation, transactional processing, and
//! post-commit notification.

use tracing::{info, warn};
use turnero::{AppliedBatch, BatchEntry, ShiftBatch};
use turnero_audit::Actor;
use turnero_domain::{DayKey, RosterMonth};
use turnero_ledger::BatchPayload;
use turnero_persistence::Persistence;

use crate::error::ApiError;
use crate::notify::{MessageGateway, Notifier};
use crate::request_response::{SubmitBatchRequest, SubmitBatchResponse};

/// Validates a wire payload into a processable batch.
///
/// Day keys are checked here, at the boundary; a malformed key drops
/// that cell with a warning and its siblings survive. Shift codes are
/// deliberately left to the processor so that an invalid code rolls
/// back the whole transaction.
///
/// Returns the batch together with the list of boundary skips.
///
/// # Errors
///
/// Returns an error if the anchor month is invalid, since the anchor
/// applies to every entry in the batch.
pub fn parse_payload(payload: &BatchPayload) -> Result<(ShiftBatch, Vec<String>), ApiError> {
    let month: Option<RosterMonth> = match (payload.ano, payload.mes) {
        (Some(year), Some(month)) => {
            Some(RosterMonth::new(year, month).map_err(|err| ApiError::InvalidInput {
                field: "mes".to_string(),
                message: err.to_string(),
            })?)
        }
        _ => None,
    };

    let mut entries: Vec<BatchEntry> = Vec::with_capacity(payload.cambios.len());
    let mut skipped: Vec<String> = Vec::new();
    for employee_payload in payload.cambios.values() {
        let mut turnos: Vec<(DayKey, String)> = Vec::with_capacity(employee_payload.turnos.len());
        for (raw_day, value) in &employee_payload.turnos {
            match DayKey::parse(raw_day) {
                Ok(day) => turnos.push((day, value.clone())),
                Err(err) => {
                    warn!(
                        employee = %employee_payload.nombre,
                        day = %raw_day,
                        "Skipping cell with malformed day key: {err}"
                    );
                    skipped.push(format!("'{}' day '{raw_day}': {err}", employee_payload.nombre));
                }
            }
        }
        if turnos.is_empty() {
            continue;
        }
        entries.push(BatchEntry {
            employee_id: employee_payload.employee_id,
            rut: employee_payload.rut.clone(),
            nombre: employee_payload.nombre.clone(),
            turnos,
        });
    }

    let batch: ShiftBatch = ShiftBatch {
        entries,
        month,
        comentario: payload.comentario.clone(),
        rol_id: payload.employee_rol_id,
        multi_month: payload.multi_month,
        recipient_selection: payload.whatsapp_recipients.clone(),
    };
    Ok((batch, skipped))
}

/// Submits one batch: validates, processes transactionally, then
/// notifies.
///
/// Notification runs only after the transaction has committed, and its
/// failures never surface here.
///
/// # Errors
///
/// Returns an error if the payload is invalid, empty, or the batch is
/// rejected by the processor. A processor rejection means nothing was
/// persisted.
pub fn submit_batch<G: MessageGateway>(
    persistence: &mut Persistence,
    notifier: &Notifier<G>,
    request: &SubmitBatchRequest,
) -> Result<SubmitBatchResponse, ApiError> {
    let (batch, boundary_skips): (ShiftBatch, Vec<String>) = parse_payload(&request.payload)?;

    if batch.is_empty() && boundary_skips.is_empty() {
        return Err(ApiError::InvalidInput {
            field: "cambios".to_string(),
            message: "no pending changes to save".to_string(),
        });
    }

    let actor: Actor = Actor::new(request.actor_id.clone(), request.actor_name.clone());
    let applied: AppliedBatch = persistence.process_batch(&batch, &actor)?;

    info!(
        actor = %actor.id,
        applied = applied.applied_count,
        skipped = applied.skipped.len(),
        "Shift batch committed"
    );

    let notifications_sent: usize =
        notifier.notify_batch(&applied, batch.recipient_selection.as_deref());

    let mut skipped: Vec<String> = boundary_skips;
    skipped.extend(applied.skipped);

    Ok(SubmitBatchResponse {
        message: format!("Applied {} change(s)", applied.applied_count),
        applied_count: applied.applied_count,
        skipped,
        notifications_sent,
    })
}
