// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side change ledger and undo engine.
//!
//! Grid edits append to an in-memory ledger of change records. Undo never
//! deletes records; it flips an `undone` flag and rebuilds the pending
//! summary from the surviving set. The summary is a materialized view over
//! the ledger: always recomputed from active records, never incrementally
//! patched, so the two can never drift apart.
//!
//! This crate also owns the wire payload for batch submission, shared
//! between the editing client and the server boundary.

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

mod builder;
mod error;
mod ledger;
mod payload;
mod record;
mod summary;
mod undo;

#[cfg(test)]
mod tests;

pub use builder::build_payload;
pub use error::LedgerError;
pub use ledger::{ChangeLedger, RecordOutcome};
pub use payload::{BatchPayload, EmployeePayload};
pub use record::ChangeRecord;
pub use summary::{EmployeeSummary, PendingChangeSummary};
pub use undo::{GridPort, UndoCoordinator, UndoOutcome};
