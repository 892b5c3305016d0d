// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod employee;
mod error;
mod types;
mod validation;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use employee::Employee;
pub use error::DomainError;
pub use types::{DayKey, RosterMonth, ShiftCode};
pub use validation::validate_shift_code;
pub use vocabulary::{UNASSIGNED_LABEL, UNKNOWN_LABEL, is_notifiable_label, shift_label};
