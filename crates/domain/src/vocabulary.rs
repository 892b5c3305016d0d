// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift vocabulary: short codes to human-readable labels.
//!
//! This table is the single source of truth for shift labels. Both the
//! audit renderer and the notification text builder resolve labels here,
//! so the audit trail and outbound messages can never disagree about what
//! a code means.

/// Label used when a cell carries no shift at all.
pub const UNASSIGNED_LABEL: &str = "Sin Turno";

/// Label used for codes the vocabulary does not recognize.
pub const UNKNOWN_LABEL: &str = "Desconocido";

/// The base code-to-label table.
///
/// An "Extra" variant of any base code is formed by a trailing `E`
/// (e.g. `ME` renders as "Mañana Extra"); exact matches win over the
/// suffix rule, so `PE` is always "Patrulla Escolar".
const SHIFT_LABELS: &[(&str, &str)] = &[
    ("M", "Mañana"),
    ("T", "Tarde"),
    ("N", "Noche"),
    ("1", "Primer Turno"),
    ("2", "Segundo Turno"),
    ("3", "Tercer Turno"),
    ("PE", "Patrulla Escolar"),
    ("A", "Administrativo"),
    ("LM", "Licencia Médica"),
    ("S", "Sin Asignar"),
];

fn exact_label(code: &str) -> Option<&'static str> {
    SHIFT_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

/// Resolves the display label for a shift code.
///
/// `None`, the empty string, and whitespace-only codes all render as
/// "Sin Turno". Unrecognized codes render as "Desconocido". Lookup is
/// case-insensitive.
#[must_use]
pub fn shift_label(code: Option<&str>) -> String {
    let Some(raw) = code else {
        return UNASSIGNED_LABEL.to_string();
    };
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return UNASSIGNED_LABEL.to_string();
    }

    let upper: String = trimmed.to_uppercase();
    if let Some(label) = exact_label(&upper) {
        return label.to_string();
    }

    // Trailing E marks the "Extra" variant of a base code.
    if let Some(stem) = upper.strip_suffix('E')
        && let Some(label) = exact_label(stem)
    {
        return format!("{label} Extra");
    }

    UNKNOWN_LABEL.to_string()
}

/// Returns whether a label describes a change worth notifying about.
///
/// Labels that carry no operational meaning (unassigned or unknown) are
/// suppressed from outbound messages.
#[must_use]
pub fn is_notifiable_label(label: &str) -> bool {
    !matches!(label, "Sin Asignar" | "Sin Turno" | "Desconocido")
}
