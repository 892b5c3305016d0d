// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Turnero shift roster.
//!
//! This crate validates wire payloads, drives the transactional batch
//! processor, and dispatches consolidated post-commit notifications. The
//! HTTP surface in the server crate is a thin adapter over these
//! functions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
pub mod notify;
mod reads;
mod request_response;
mod submit;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use reads::{audit_trail, audit_trail_for_employee, month_grid, register_employee};
pub use request_response::{
    AuditTrailResponse, ChangeLogEntryInfo, GridCellInfo, MonthGridResponse,
    RegisterEmployeeRequest, RegisterEmployeeResponse, SubmitBatchRequest, SubmitBatchResponse,
};
pub use submit::{parse_payload, submit_batch};
