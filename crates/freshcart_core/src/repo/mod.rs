//! Persistent collection store.
//!
//! # Responsibility
//! - Define the durable load/save contract for the three collections.
//! - Isolate SQLite and JSON snapshot details from the state service.
//!
//! # Invariants
//! - Every save overwrites its collection key with a full snapshot.
//! - Keys are written independently; there is no cross-key transaction.
//! - Absence of a key is first-run state, never an error.

pub mod collection_repo;
pub mod seed;
