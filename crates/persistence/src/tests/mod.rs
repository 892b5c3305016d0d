// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod processor_tests;

use turnero::{BatchEntry, ShiftBatch};
use turnero_audit::Actor;
use turnero_domain::{DayKey, RosterMonth};

use crate::Persistence;

fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

fn test_actor() -> Actor {
    Actor::new("supervisor-1".to_string(), "Test Supervisor".to_string())
}

fn seed_employee(persistence: &mut Persistence, rut: &str, full_name: &str, rol_id: i64) -> i64 {
    persistence
        .insert_employee(rut, full_name, Some("+56911112222"), rol_id)
        .expect("employee insert should succeed")
}

fn july() -> RosterMonth {
    RosterMonth::new(2025, 7).expect("valid month")
}

/// A batch editing one or more cells of a single employee.
fn batch_for(
    employee_id: Option<i64>,
    rut: &str,
    nombre: &str,
    month: Option<RosterMonth>,
    turnos: Vec<(DayKey, String)>,
) -> ShiftBatch {
    let multi_month: bool = month.is_none();
    ShiftBatch {
        entries: vec![BatchEntry {
            employee_id,
            rut: rut.to_string(),
            nombre: nombre.to_string(),
            turnos,
        }],
        month,
        comentario: "batch test".to_string(),
        rol_id: 1,
        multi_month,
        recipient_selection: None,
    }
}
