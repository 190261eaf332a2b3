//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all roster operations, regardless of the UI being
//! used.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured `Result` types. It holds no business logic and does no I/O
//! formatting of its own.
//!
//! ## Generic Over RecordStore
//!
//! `RosterApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, NewEmployee};
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// The main API facade for roster operations.
///
/// Generic over `RecordStore` to allow different storage backends. All UI
/// clients should interact through this API.
pub struct RosterApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a record; the store assigns its id unless `id_override` is given.
    pub fn add_employee(&mut self, new: NewEmployee, id_override: Option<u64>) -> Result<Employee> {
        commands::add::run(&mut self.store, new, id_override)
    }

    /// Remove records by id; returns how many were removed (0 is not an error).
    pub fn remove_employee(&mut self, id: u64) -> Result<usize> {
        commands::remove::run(&mut self.store, id)
    }

    /// The current record set, newest first.
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        commands::list::run(&self.store)
    }

    /// Write the YAML export to `target` and return the path written.
    pub fn export_employees(&self, target: &Path) -> Result<PathBuf> {
        commands::export::run(&self.store, target)
    }
}
