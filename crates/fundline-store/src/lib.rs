//! Keyed state storage for the Fundline ledger.
//!
//! This crate implements the state store collaborator: a byte-key to
//! byte-value store with point lookups only. The ledger engine addresses
//! every record through it and never caches records across operations.
//!
//! # Storage Backends
//!
//! All backends implement the [`StateStore`] trait:
//!
//! - [`InMemoryStateStore`] -- `HashMap`-based store for tests and embedding
//! - [`FileStateStore`] -- single JSON document on disk, rewritten
//!   atomically on every write; used by the CLI for persistence across runs
//!
//! # Design Rules
//!
//! 1. `get` on a missing key is `Ok(None)`, never an error.
//! 2. Single-key writes are atomic; there are no multi-key transactions.
//! 3. The store never interprets values -- it is a pure key-value store.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
