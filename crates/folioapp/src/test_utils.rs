use crate::store::fs_backend::FsBackend;
use crate::store::mem_backend::MemBackend;
use crate::store::profile_store::ProfileStore;
use crate::store::storage::ProfileStorage;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A fresh, loaded store over the temp directory. Calling it again
    /// simulates a restart: the new store reads what the previous one saved.
    pub fn open_store(&self) -> ProfileStore<FsBackend> {
        ProfileStore::open(ProfileStorage::new(FsBackend::new(self.root.clone())))
    }
}

/// A loaded in-memory store plus a handle on its backend.
pub fn mem_store() -> (MemBackend, ProfileStore<MemBackend>) {
    let backend = MemBackend::new();
    let store = ProfileStore::open(ProfileStorage::new(backend.clone()));
    (backend, store)
}
