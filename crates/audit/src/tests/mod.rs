// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use time::macros::{date, datetime};

use crate::{Actor, ShiftChangeLogEntry, ShiftMutationKind};

#[test]
fn test_mutation_kinds_carry_fixed_comments() {
    assert_eq!(
        ShiftMutationKind::Created.platform_comment(),
        "created via platform"
    );
    assert_eq!(
        ShiftMutationKind::Modified.platform_comment(),
        "modified via platform"
    );
    assert_eq!(
        ShiftMutationKind::Deleted.platform_comment(),
        "deleted via platform"
    );
}

#[test]
fn test_creation_entry_has_empty_old_shift() {
    let entry: ShiftChangeLogEntry = ShiftChangeLogEntry::for_mutation(
        ShiftMutationKind::Created,
        7,
        Some(42),
        "user-1",
        "",
        "M",
        date!(2025 - 07 - 10),
        datetime!(2025-07-01 12:00 UTC),
    );
    assert_eq!(entry.old_shift, "");
    assert_eq!(entry.new_shift, "M");
    assert_eq!(entry.comment, "created via platform");
    assert_eq!(entry.shift_assignment_id, Some(42));
}

#[test]
fn test_deletion_entry_has_no_assignment_reference() {
    let entry: ShiftChangeLogEntry = ShiftChangeLogEntry::for_mutation(
        ShiftMutationKind::Deleted,
        7,
        None,
        "user-1",
        "N",
        "",
        date!(2025 - 07 - 10),
        datetime!(2025-07-01 12:00 UTC),
    );
    assert_eq!(entry.new_shift, "");
    assert_eq!(entry.shift_assignment_id, None);
    assert_eq!(entry.comment, "deleted via platform");
}

#[test]
fn test_actor_fields() {
    let actor: Actor = Actor::new(String::from("user-9"), String::from("Supervisor Uno"));
    assert_eq!(actor.id, "user-9");
    assert_eq!(actor.display_name, "Supervisor Uno");
}
