// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Turnero shift roster.
//!
//! This crate owns the `SQLite` database: the employee directory, the
//! current shift assignments, and the append-only shift change log. The
//! batch processor lives here because its atomicity guarantee is a
//! transaction boundary.
//!
//! All queries and mutations use the Diesel DSL; raw SQL appears only
//! for PRAGMA statements, which Diesel has no DSL for. In-memory
//! databases are used for tests, file-backed databases (with WAL mode)
//! for deployments.

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use time::Date;
use turnero::{AppliedBatch, ShiftBatch};
use turnero_audit::{Actor, ShiftChangeLogEntry};
use turnero_domain::Employee;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::ShiftAssignment;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// concurrent tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The persistence adapter.
///
/// Owns one `SQLite` connection and exposes the roster's queries and
/// mutations as methods. The batch processor runs inside a single
/// transaction on this connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter backed by an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique shared-memory database via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:turnero_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases.
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Applies one shift batch inside a single transaction.
    ///
    /// Entries whose employee or date cannot be resolved are skipped and
    /// reported; any other failure rolls back the entire batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch contains an invalid shift code or
    /// any mutation fails. Nothing is persisted in that case.
    pub fn process_batch(
        &mut self,
        batch: &ShiftBatch,
        actor: &Actor,
    ) -> Result<AppliedBatch, PersistenceError> {
        mutations::processor::process_batch(&mut self.conn, batch, actor)
    }

    /// Registers a new employee and returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, for example on a duplicate
    /// RUT.
    pub fn insert_employee(
        &mut self,
        rut: &str,
        full_name: &str,
        phone: Option<&str>,
        rol_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, rut, full_name, phone, rol_id)
    }

    /// Looks up one employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_employee(&mut self, id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::find_employee(&mut self.conn, id)
    }

    /// Looks up one employee by RUT.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_employee_by_rut(
        &mut self,
        rut: &str,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::find_employee_by_rut(&mut self.conn, rut)
    }

    /// Lists every employee assigned to one roster role.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employees_for_rol(&mut self, rol_id: i64) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::employees_for_rol(&mut self.conn, rol_id)
    }

    /// Loads the assignment for one `(employee, date)` cell, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// reconstructed.
    pub fn assignment_for(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Option<ShiftAssignment>, PersistenceError> {
        queries::assignments::assignment_for(&mut self.conn, employee_id, date)
    }

    /// Loads every assignment for one role within one calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// reconstructed.
    pub fn assignments_for_month(
        &mut self,
        rol_id: i64,
        year: i32,
        month: u8,
    ) -> Result<Vec<(Employee, ShiftAssignment)>, PersistenceError> {
        queries::assignments::assignments_for_month(&mut self.conn, rol_id, year, month)
    }

    /// Loads the most recent change-log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// reconstructed.
    pub fn change_log(&mut self, limit: i64) -> Result<Vec<ShiftChangeLogEntry>, PersistenceError> {
        queries::audit::change_log(&mut self.conn, limit)
    }

    /// Loads the most recent change-log entries for one employee,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// reconstructed.
    pub fn change_log_for_employee(
        &mut self,
        employee_id: i64,
        limit: i64,
    ) -> Result<Vec<ShiftChangeLogEntry>, PersistenceError> {
        queries::audit::change_log_for_employee(&mut self.conn, employee_id, limit)
    }
}
