//! Business logic for each operation. Commands take a [`RecordStore`]
//! implementation plus plain arguments and return plain values; no terminal
//! I/O happens at this layer.
//!
//! Every command is read-modify-write against the store: load the whole
//! record set, change it in memory, save the whole set back.
//!
//! [`RecordStore`]: crate::store::RecordStore

pub mod add;
pub mod export;
pub mod list;
pub mod remove;
