//! # Context Initialization
//!
//! Wires configuration, storage and the avatar lookup into a [`FolioContext`]
//! that a client builds once at startup and passes to whatever needs the store.
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. `data_dir` from configuration (`FOLIO_DATA_DIR` or `folio.toml`).
//! 3. The platform data directory, via the `directories` crate.

use crate::avatar::AvatarLookup;
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::profile_store::ProfileStore;
use crate::store::storage::ProfileStorage;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FolioContext {
    pub store: ProfileStore<FsBackend>,
    pub config: FolioConfig,
    pub avatar: Option<AvatarLookup>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

/// `folio.toml` in the platform config directory.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("folio.toml"))
}

pub fn resolve_data_dir(config: &FolioConfig, data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(dir);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FolioError::Store("Could not determine data directory".to_string()))
}

/// Build the context with an already-loaded configuration.
pub fn initialize_with(config: FolioConfig, data_override: Option<PathBuf>) -> Result<FolioContext> {
    config.validate()?;
    let data_dir = resolve_data_dir(&config, data_override)?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "initializing profile store");

    let storage = ProfileStorage::with_key(FsBackend::new(data_dir), config.storage_key.clone());
    let store = ProfileStore::open(storage);

    let avatar = if config.avatar_lookup {
        match AvatarLookup::new(config.avatar_api.clone()) {
            Ok(lookup) => Some(lookup),
            Err(err) => {
                warn!(error = %err, "avatar lookup disabled");
                None
            }
        }
    } else {
        None
    };

    Ok(FolioContext {
        store,
        config,
        avatar,
    })
}

/// Load configuration (from `config_file`, or the default location when it
/// exists) and build the context.
pub fn initialize(data_override: Option<PathBuf>, config_file: Option<&Path>) -> Result<FolioContext> {
    let default_file = default_config_file().filter(|path| path.exists());
    let file = config_file.or(default_file.as_deref());
    let config = FolioConfig::load(file)?;
    initialize_with(config, data_override)
}
