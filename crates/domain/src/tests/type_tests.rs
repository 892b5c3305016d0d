// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Month;
use time::macros::date;

use crate::{DayKey, DomainError, Employee, RosterMonth, ShiftCode};

#[test]
fn test_shift_code_normalizes_case_and_whitespace() {
    let code: ShiftCode = ShiftCode::new(" m ").unwrap();
    assert_eq!(code.value(), "M");
    assert_eq!(code.label(), "Mañana");
}

#[test]
fn test_shift_code_rejects_empty_and_oversized() {
    assert!(matches!(
        ShiftCode::new("   "),
        Err(DomainError::InvalidShiftCode(_))
    ));
    assert!(matches!(
        ShiftCode::new("TURNO"),
        Err(DomainError::InvalidShiftCode(_))
    ));
    assert!(matches!(
        ShiftCode::new("M-1"),
        Err(DomainError::InvalidShiftCode(_))
    ));
}

#[test]
fn test_day_key_parses_bare_day_numbers() {
    assert_eq!(DayKey::parse("7").unwrap(), DayKey::DayOfMonth(7));
    assert_eq!(DayKey::parse(" 31 ").unwrap(), DayKey::DayOfMonth(31));
    assert!(!DayKey::DayOfMonth(7).is_full_date());
}

#[test]
fn test_day_key_parses_full_dates() {
    let key: DayKey = DayKey::parse("2025-07-10").unwrap();
    assert_eq!(key, DayKey::Date(date!(2025 - 07 - 10)));
    assert!(key.is_full_date());
    assert_eq!(key.wire_key(), "2025-07-10");
}

#[test]
fn test_day_key_rejects_out_of_range_and_garbage() {
    assert!(matches!(
        DayKey::parse("0"),
        Err(DomainError::InvalidDay { .. })
    ));
    assert!(matches!(
        DayKey::parse("32"),
        Err(DomainError::InvalidDay { .. })
    ));
    assert!(matches!(
        DayKey::parse("next tuesday"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_roster_month_resolves_days() {
    let month: RosterMonth = RosterMonth::new(2025, 7).unwrap();
    assert_eq!(month.month(), Month::July);
    assert_eq!(
        month.resolve_date(&DayKey::DayOfMonth(10)).unwrap(),
        date!(2025 - 07 - 10)
    );
    // Full dates pass through regardless of the anchor month.
    assert_eq!(
        month.resolve_date(&DayKey::Date(date!(2025 - 08 - 01))).unwrap(),
        date!(2025 - 08 - 01)
    );
}

#[test]
fn test_roster_month_rejects_nonexistent_day() {
    let month: RosterMonth = RosterMonth::new(2025, 4).unwrap();
    assert!(matches!(
        month.resolve_date(&DayKey::DayOfMonth(31)),
        Err(DomainError::InvalidDayForMonth { day: 31, .. })
    ));
}

#[test]
fn test_roster_month_rejects_invalid_month_number() {
    assert!(matches!(
        RosterMonth::new(2025, 13),
        Err(DomainError::InvalidMonth { month: 13 })
    ));
}

#[test]
fn test_employee_short_name_takes_first_name_and_first_surname() {
    let employee: Employee = Employee::new(
        1,
        String::from("12.345.678-9"),
        String::from("María José Pérez Soto"),
        None,
        1,
    );
    assert_eq!(employee.short_name(), "María Pérez");

    let two_words: Employee = Employee::new(
        2,
        String::from("9.876.543-2"),
        String::from("Juan Rojas"),
        None,
        1,
    );
    assert_eq!(two_words.short_name(), "Juan Rojas");
}
