// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure planning core for batch shift updates.
//!
//! Given the currently persisted assignment for a cell and the requested
//! value, the planner decides whether the cell needs a creation, an
//! update, a deletion, or nothing at all. The decision is pure data; the
//! persistence layer executes it inside one transaction per batch.

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

mod applied;
mod batch;
mod error;
mod plan;

#[cfg(test)]
mod tests;

pub use applied::{AppliedBatch, AppliedChange, EmployeeChanges};
pub use batch::{BatchEntry, ShiftBatch, resolve_entry_date};
pub use error::CoreError;
pub use plan::{MutationPlan, plan_mutation};
