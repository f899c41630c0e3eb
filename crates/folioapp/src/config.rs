//! # Configuration
//!
//! Folio configuration is managed by [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FOLIO_STORAGE_KEY`, `FOLIO_DATA_DIR`, ...
//! 2. **Config file**: `folio.toml` in the platform config directory, or the
//!    file given with `--config`.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `storage_key` | `FOLIO_STORAGE_KEY` | `portfolio-profile-data` | Key the document is stored under |
//! | `data_dir` | `FOLIO_DATA_DIR` | platform data dir | Directory holding the stored document |
//! | `avatar_api` | `FOLIO_AVATAR_API` | `https://api.github.com` | Base URL for the avatar lookup |
//! | `avatar_lookup` | `FOLIO_AVATAR_LOOKUP` | `true` | Whether to look up a fallback avatar at all |

use crate::avatar::DEFAULT_AVATAR_API;
use crate::defaults::DEFAULT_STORAGE_KEY;
use crate::error::{FolioError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Key the profile document is stored under.
    #[config(default = "portfolio-profile-data", env = "FOLIO_STORAGE_KEY")]
    pub storage_key: String,

    /// Directory holding the stored document.
    /// When absent, the platform data directory is used.
    #[config(env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the GitHub-compatible API used for avatar lookups.
    #[config(default = "https://api.github.com", env = "FOLIO_AVATAR_API")]
    pub avatar_api: String,

    /// Set to false to never make network requests.
    #[config(default = true, env = "FOLIO_AVATAR_LOOKUP")]
    pub avatar_lookup: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            avatar_api: DEFAULT_AVATAR_API.to_string(),
            avatar_lookup: true,
        }
    }
}

impl FolioConfig {
    /// Load from the environment and, when given, a TOML file.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = FolioConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        let config = builder
            .load()
            .map_err(|err| FolioError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The storage key names a file in the data directory, so it must be a
    /// plain file name.
    pub fn validate(&self) -> Result<()> {
        let key = self.storage_key.as_str();
        let bad = key.trim().is_empty()
            || key == "."
            || key.contains("..")
            || key.contains(['/', '\\', '\0']);
        if bad {
            return Err(FolioError::Config(format!(
                "invalid storage_key {:?}: must be a plain name without path separators or \"..\"",
                key
            )));
        }
        Ok(())
    }
}
