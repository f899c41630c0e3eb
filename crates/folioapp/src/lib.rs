//! # Folio Architecture
//!
//! Folio is a **UI-agnostic portfolio profile library**. The profile (bio, skills,
//! projects, certifications, achievements, links) is one JSON document kept in a
//! key-value store; every client edits it through the same [`ProfileStore`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `folio` CLI, or any other UI)                  │
//! │  - Reads snapshots, calls store operations                  │
//! │  - Validates uploads before handing them to the store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ProfileStore (store/profile_store.rs)                      │
//! │  - Owns the live document, typed add/update/remove          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ProfileStorage + StorageBackend (store/)                   │
//! │  - Merge-over-defaults load, stamped save, reset            │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Storage
//! and network problems degrade to defaults and are reported through `tracing`;
//! only configuration and upload errors are returned to the caller.
//!
//! ## Module Overview
//!
//! - [`model`]: The document and its entities, patches, the `Entry` trait
//! - [`defaults`]: The seeded document every load is merged over
//! - [`store`]: Backends, the storage adapter and the profile store
//! - [`files`]: Upload validation and data-URI encoding
//! - [`avatar`]: Best-effort GitHub avatar lookup
//! - [`config`]: Configuration management
//! - [`init`]: Builds a ready-to-use context for clients
//! - [`error`]: Error types

pub mod avatar;
pub mod config;
pub mod defaults;
pub mod error;
pub mod files;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use store::profile_store::ProfileStore;
