//! # Storage Layer
//!
//! Folio keeps the whole portfolio as one JSON document under one key of a
//! key-value medium. The medium is abstracted behind [`StorageBackend`]:
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key under a data directory.
//! - [`mem_backend::MemBackend`]: an in-memory map, for tests and session-only use.
//!
//! On top of the backend sit two layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ProfileStore (profile_store.rs)                            │
//! │  - Owns the live document, the only way to mutate it        │
//! │  - Persists after every mutation once Ready                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ProfileStorage (storage.rs)                                │
//! │  - load: shallow merge of the stored document over defaults │
//! │  - save: stamps lastUpdated, never fails the caller         │
//! │  - reset: forgets the stored document                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StorageBackend (this module)                               │
//! │  - Raw string reads/writes by key                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Storage failures never reach the UI. A failed load yields the default
//! document, a failed save is logged and the in-memory document stays the
//! source of truth until the process ends.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;
pub mod profile_store;
pub mod storage;

/// Abstract interface for raw key-value storage I/O.
/// The backend knows "how" values are kept; `ProfileStorage` knows "what" they mean.
pub trait StorageBackend {
    /// Read the raw value for `key`.
    /// Returns Ok(None) if nothing is stored under it.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value for `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Where the value for `key` lives. A virtual path for non-file backends.
    fn location(&self, key: &str) -> PathBuf;
}
