// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    employees (employee_id) {
        employee_id -> BigInt,
        rut -> Text,
        full_name -> Text,
        phone -> Nullable<Text>,
        rol_id -> BigInt,
    }
}

diesel::table! {
    shift_assignments (shift_assignment_id) {
        shift_assignment_id -> BigInt,
        employee_id -> BigInt,
        shift_date -> Text,
        shift_code -> Text,
        comments -> Nullable<Text>,
    }
}

diesel::table! {
    shift_change_log (log_id) {
        log_id -> BigInt,
        employee_id -> BigInt,
        shift_assignment_id -> Nullable<BigInt>,
        changed_by -> Text,
        old_shift -> Text,
        new_shift -> Text,
        comment -> Text,
        shift_date -> Text,
        changed_at -> Text,
    }
}

diesel::joinable!(shift_assignments -> employees (employee_id));
diesel::joinable!(shift_change_log -> employees (employee_id));

diesel::allow_tables_to_appear_in_same_query!(employees, shift_assignments, shift_change_log);
