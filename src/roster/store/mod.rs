//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`RecordStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The full record set in one JSON array file (`employees.json` by default)
//!   - A missing file reads as an empty record set
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, a single UTF-8 file holding a pretty-printed JSON array,
//! newest record first:
//!
//! ```text
//! [
//!   { "id": 2, "name": "...", "position": "..." },
//!   { "id": 1, "name": "...", "position": "..." }
//! ]
//! ```
//!
//! The array is insertion-ordered, not sorted by id. Writes replace the whole
//! file; there is no atomic-rename step, so a failed write offers no rollback
//! guarantee.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
///
/// Implementations hold the location of one record collection and expose
/// whole-set load/save. Everything above this trait works on in-memory
/// `Vec<Employee>` values.
pub trait RecordStore {
    /// Load the full record set. A store that has never been written to
    /// yields an empty set, not an error.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the full record set.
    fn save(&mut self, records: &[Employee]) -> Result<()>;
}
